mod auth;
mod query;
mod tooltip;
mod wallet;

pub use auth::{AuthContext, AuthProvider, AuthStatus};
pub use query::{QueryClient, QueryClientProvider};
pub use tooltip::{Tooltip, TooltipContext, TooltipProvider};
pub use wallet::{WalletContext, WalletProvider};
