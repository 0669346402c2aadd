use dioxus::prelude::*;

use crate::components::ScreenFrame;
use crate::providers::Tooltip;
use crate::route::Route;

pub struct Feature {
    pub route: Route,
    pub summary: &'static str,
}

pub fn features() -> Vec<Feature> {
    [
        (Route::TradePage {}, "Live market prices"),
        (Route::SwapPage {}, "Exchange between your assets"),
        (Route::BridgePage {}, "Move assets across chains"),
        (Route::FiatPage {}, "Buy crypto with fiat"),
        (Route::SellPage {}, "Sell crypto for fiat"),
        (Route::PoolsPage {}, "Provide liquidity and earn fees"),
        (Route::DefiConnectionsPage {}, "Apps connected to your wallet"),
        (Route::CryptoAiPage {}, "Signals from trading models"),
        (Route::GovernancePage {}, "Vote on open proposals"),
        (Route::NftCollectionsPage {}, "Your collectibles"),
        (Route::SolarflarePage {}, "Solarflare network status"),
        (Route::MetricsPage {}, "Network and market metrics"),
        (Route::VeterinariansPage {}, "Veterinarians accepting crypto"),
        (Route::PetStoresPage {}, "Pet stores accepting crypto"),
        (Route::AdvertisingFormPage {}, "Promote your business here"),
    ]
    .into_iter()
    .map(|(route, summary)| Feature { route, summary })
    .collect()
}

#[component]
pub fn DiscoverPage() -> Element {
    rsx! {
        ScreenFrame { title: "Discover", subtitle: "Everything you can do with your wallet.",
            div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                for feature in features() {
                    Tooltip { key: "{feature.route}", tip: feature.summary,
                        Link {
                            class: "card bg-base-200 shadow hover:bg-base-300 w-full",
                            to: feature.route.clone(),
                            div { class: "card-body",
                                h2 { class: "card-title", "{feature.route.title()}" }
                                p { class: "opacity-70 text-left", "{feature.summary}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::route::{Access, Chrome};

    #[test]
    fn test_features_link_to_distinct_layout_routes() {
        let features = features();
        assert!(features.iter().map(|feature| feature.route.to_string()).all_unique());
        for feature in &features {
            assert_eq!(feature.route.access(), Access::Protected);
            assert_eq!(feature.route.chrome(), Chrome::Layout);
            assert_ne!(feature.route, Route::DiscoverPage {});
        }
    }
}
