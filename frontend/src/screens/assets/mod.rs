mod crypto;
mod list;
mod nft;
mod transactions;

pub use crypto::{format_change, CryptoDetailPage};
pub use list::MyAssetsPage;
pub use nft::NftCollectionsPage;
pub use transactions::AssetTransactionsPage;
