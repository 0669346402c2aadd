use dioxus::prelude::*;
use strum::AsRefStr;

use crate::components::{AppLayout, ProtectedRoute};
use crate::screens::*;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Index {},
    #[route("/login")]
    LoginPage {},
    #[route("/welcome")]
    WelcomeScreen {},
    #[route("/email-signup")]
    EmailSignupPage {},
    #[route("/seed-phrase")]
    SeedPhrasePage {},
    #[route("/verify-seed")]
    VerifySeedPage {},
    #[route("/import")]
    ImportWalletPage {},
    #[route("/privacy-policy")]
    PrivacyPolicyPage {},

    #[layout(ProtectedRoute)]
        #[route("/auth")]
        AuthScreen {},

        #[layout(AppLayout)]
            #[route("/discover")]
            DiscoverPage {},
            #[route("/dashboard")]
            Dashboard {},
            #[route("/my-assets")]
            MyAssetsPage {},
            #[route("/my-assets/:asset_id/transactions")]
            AssetTransactionsPage { asset_id: String },
            #[route("/nft-collections")]
            NftCollectionsPage {},
            #[route("/receive")]
            ReceiveScreen {},
            #[route("/crypto/:id")]
            CryptoDetailPage { id: String },
            #[route("/defi")]
            DefiConnectionsPage {},
            #[route("/settings")]
            SettingsPage {},
            #[route("/send")]
            SendPage {},
            #[route("/sell")]
            SellPage {},
            #[route("/ai-trading")]
            CryptoAiPage {},
            #[route("/veterinarians")]
            VeterinariansPage {},
            #[route("/pet-stores")]
            PetStoresPage {},
            #[route("/advertising-form")]
            AdvertisingFormPage {},
            #[route("/swap")]
            SwapPage {},
            #[route("/trade")]
            TradePage {},
            #[route("/bridge")]
            BridgePage {},
            #[route("/governance")]
            GovernancePage {},
            #[route("/pools")]
            PoolsPage {},
            #[route("/solarflare")]
            SolarflarePage {},
            #[route("/metrics")]
            MetricsPage {},
            #[route("/fiat")]
            FiatPage {},
        #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[derive(Debug, Clone, Copy, AsRefStr, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
}

/// Whether the shared navigation frame wraps the screen.
#[derive(Debug, Clone, Copy, AsRefStr, PartialEq, Eq)]
pub enum Chrome {
    None,
    Layout,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

impl Route {
    pub fn access(&self) -> Access {
        match self {
            Self::Index {}
            | Self::LoginPage {}
            | Self::WelcomeScreen {}
            | Self::EmailSignupPage {}
            | Self::SeedPhrasePage {}
            | Self::VerifySeedPage {}
            | Self::ImportWalletPage {}
            | Self::PrivacyPolicyPage {}
            | Self::NotFound { .. } => Access::Public,
            _ => Access::Protected,
        }
    }

    pub fn chrome(&self) -> Chrome {
        match self.access() {
            Access::Protected if !matches!(self, Self::AuthScreen {}) => Chrome::Layout,
            _ => Chrome::None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Index {} => "Wallet",
            Self::LoginPage {} => "Log in",
            Self::WelcomeScreen {} => "Welcome",
            Self::EmailSignupPage {} => "Create account",
            Self::SeedPhrasePage {} => "Recovery phrase",
            Self::VerifySeedPage {} => "Verify recovery phrase",
            Self::ImportWalletPage {} => "Import wallet",
            Self::PrivacyPolicyPage {} => "Privacy policy",
            Self::AuthScreen {} => "Unlock",
            Self::DiscoverPage {} => "Discover",
            Self::Dashboard {} => "Dashboard",
            Self::MyAssetsPage {} => "My assets",
            Self::AssetTransactionsPage { .. } => "Transactions",
            Self::NftCollectionsPage {} => "NFT collections",
            Self::ReceiveScreen {} => "Receive",
            Self::CryptoDetailPage { .. } => "Market",
            Self::DefiConnectionsPage {} => "DeFi connections",
            Self::SettingsPage {} => "Settings",
            Self::SendPage {} => "Send",
            Self::SellPage {} => "Sell",
            Self::CryptoAiPage {} => "AI trading",
            Self::VeterinariansPage {} => "Veterinarians",
            Self::PetStoresPage {} => "Pet stores",
            Self::AdvertisingFormPage {} => "Advertise with us",
            Self::SwapPage {} => "Swap",
            Self::TradePage {} => "Trade",
            Self::BridgePage {} => "Bridge",
            Self::GovernancePage {} => "Governance",
            Self::PoolsPage {} => "Pools",
            Self::SolarflarePage {} => "Solarflare",
            Self::MetricsPage {} => "Metrics",
            Self::FiatPage {} => "Buy crypto",
            Self::NotFound { .. } => "Not found",
        }
    }

    pub fn navigation() -> [NavItem; 9] {
        [
            Self::Dashboard {},
            Self::MyAssetsPage {},
            Self::DiscoverPage {},
            Self::SendPage {},
            Self::ReceiveScreen {},
            Self::SwapPage {},
            Self::DefiConnectionsPage {},
            Self::NftCollectionsPage {},
            Self::SettingsPage {},
        ]
        .map(|route| NavItem { label: route.title(), route })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("/", Route::Index {}, Access::Public, Chrome::None)]
    #[case("/login", Route::LoginPage {}, Access::Public, Chrome::None)]
    #[case("/welcome", Route::WelcomeScreen {}, Access::Public, Chrome::None)]
    #[case("/email-signup", Route::EmailSignupPage {}, Access::Public, Chrome::None)]
    #[case("/seed-phrase", Route::SeedPhrasePage {}, Access::Public, Chrome::None)]
    #[case("/verify-seed", Route::VerifySeedPage {}, Access::Public, Chrome::None)]
    #[case("/import", Route::ImportWalletPage {}, Access::Public, Chrome::None)]
    #[case("/privacy-policy", Route::PrivacyPolicyPage {}, Access::Public, Chrome::None)]
    #[case("/auth", Route::AuthScreen {}, Access::Protected, Chrome::None)]
    #[case("/discover", Route::DiscoverPage {}, Access::Protected, Chrome::Layout)]
    #[case("/dashboard", Route::Dashboard {}, Access::Protected, Chrome::Layout)]
    #[case("/my-assets", Route::MyAssetsPage {}, Access::Protected, Chrome::Layout)]
    #[case(
        "/my-assets/eth/transactions",
        Route::AssetTransactionsPage { asset_id: "eth".into() },
        Access::Protected,
        Chrome::Layout
    )]
    #[case("/nft-collections", Route::NftCollectionsPage {}, Access::Protected, Chrome::Layout)]
    #[case("/receive", Route::ReceiveScreen {}, Access::Protected, Chrome::Layout)]
    #[case(
        "/crypto/bitcoin",
        Route::CryptoDetailPage { id: "bitcoin".into() },
        Access::Protected,
        Chrome::Layout
    )]
    #[case("/defi", Route::DefiConnectionsPage {}, Access::Protected, Chrome::Layout)]
    #[case("/settings", Route::SettingsPage {}, Access::Protected, Chrome::Layout)]
    #[case("/send", Route::SendPage {}, Access::Protected, Chrome::Layout)]
    #[case("/sell", Route::SellPage {}, Access::Protected, Chrome::Layout)]
    #[case("/ai-trading", Route::CryptoAiPage {}, Access::Protected, Chrome::Layout)]
    #[case("/veterinarians", Route::VeterinariansPage {}, Access::Protected, Chrome::Layout)]
    #[case("/pet-stores", Route::PetStoresPage {}, Access::Protected, Chrome::Layout)]
    #[case("/advertising-form", Route::AdvertisingFormPage {}, Access::Protected, Chrome::Layout)]
    #[case("/swap", Route::SwapPage {}, Access::Protected, Chrome::Layout)]
    #[case("/trade", Route::TradePage {}, Access::Protected, Chrome::Layout)]
    #[case("/bridge", Route::BridgePage {}, Access::Protected, Chrome::Layout)]
    #[case("/governance", Route::GovernancePage {}, Access::Protected, Chrome::Layout)]
    #[case("/pools", Route::PoolsPage {}, Access::Protected, Chrome::Layout)]
    #[case("/solarflare", Route::SolarflarePage {}, Access::Protected, Chrome::Layout)]
    #[case("/metrics", Route::MetricsPage {}, Access::Protected, Chrome::Layout)]
    #[case("/fiat", Route::FiatPage {}, Access::Protected, Chrome::Layout)]
    fn test_route_table(
        #[case] path: &str,
        #[case] route: Route,
        #[case] access: Access,
        #[case] chrome: Chrome,
    ) {
        let parsed: Route = path.parse().unwrap();
        assert_eq!(parsed, route);
        assert_eq!(parsed.access(), access);
        assert_eq!(parsed.chrome(), chrome);
        assert_eq!(parsed.to_string(), path);
    }

    #[rstest]
    #[case("/does-not-exist", &["does-not-exist"])]
    #[case("/dashboard/extra", &["dashboard", "extra"])]
    #[case("/my-assets/eth", &["my-assets", "eth"])]
    fn test_unmatched_path_is_not_found(#[case] path: &str, #[case] segments: &[&str]) {
        let parsed: Route = path.parse().unwrap();
        assert_eq!(
            parsed,
            Route::NotFound { segments: segments.iter().map(|s| s.to_string()).collect() }
        );
        assert_eq!(parsed.access(), Access::Public);
        assert_eq!(parsed.chrome(), Chrome::None);
    }

    #[test]
    fn test_navigation_targets_layout_routes() {
        for item in Route::navigation() {
            assert_eq!(item.route.access(), Access::Protected, "{}", item.label);
            assert_eq!(item.route.chrome(), Chrome::Layout, "{}", item.label);
            assert_eq!(item.label, item.route.title());
        }
    }
}
