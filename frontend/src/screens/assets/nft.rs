use dioxus::prelude::*;

use crate::components::{Listing, ScreenFrame};

#[component]
pub fn NftCollectionsPage() -> Element {
    rsx! {
        ScreenFrame { title: "NFT collections",
            Listing { path: "nfts", empty: "No collectible in this wallet." }
        }
    }
}
