mod email_signup;
mod import;
mod seed_phrase;
mod verify_seed;
mod welcome;

pub use email_signup::EmailSignupPage;
pub use import::ImportWalletPage;
pub use seed_phrase::SeedPhrasePage;
pub use verify_seed::VerifySeedPage;
pub use welcome::WelcomeScreen;
