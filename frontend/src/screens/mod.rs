mod advertising;
mod assets;
mod auth;
mod dashboard;
mod directory;
mod discover;
mod index;
mod login;
mod not_found;
mod onboarding;
mod privacy_policy;
mod receive;
mod settings;
mod transfer;

pub use advertising::AdvertisingFormPage;
pub use assets::{AssetTransactionsPage, CryptoDetailPage, MyAssetsPage, NftCollectionsPage};
pub use auth::AuthScreen;
pub use dashboard::Dashboard;
pub use directory::{
    CryptoAiPage, DefiConnectionsPage, GovernancePage, MetricsPage, PetStoresPage, PoolsPage,
    SolarflarePage, VeterinariansPage,
};
pub use discover::DiscoverPage;
pub use index::Index;
pub use login::LoginPage;
pub use not_found::NotFound;
pub use onboarding::{
    EmailSignupPage, ImportWalletPage, SeedPhrasePage, VerifySeedPage, WelcomeScreen,
};
pub use privacy_policy::PrivacyPolicyPage;
pub use receive::ReceiveScreen;
pub use settings::SettingsPage;
pub use transfer::{BridgePage, FiatPage, SellPage, SendPage, SwapPage, TradePage};
