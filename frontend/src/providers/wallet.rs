use concat_string::concat_string;
use dioxus::prelude::*;
use dioxus_sdk::storage::{use_synced_storage, LocalStorage};
use serde::{Deserialize, Serialize};
use strum::AsRefStr;
use time::OffsetDateTime;
use uuid::Uuid;
use wallet_types::mnemonic::{Mnemonic, MnemonicError};

use super::{AuthContext, AuthStatus};

const WALLET_KEY: &str = "wallet-state";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, AsRefStr, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Created,
    Imported,
}

/// What is kept about a wallet. The recovery phrase itself is never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wallet {
    pub id: Uuid,
    pub name: String,
    pub fingerprint: String,
    pub origin: Origin,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletState {
    pub wallets: Vec<Wallet>,
    pub active: Option<Uuid>,
}

impl WalletState {
    /// Adds the wallet for `mnemonic` and makes it active. A phrase that is already known
    /// re-activates the existing wallet instead of duplicating it.
    pub fn add(&mut self, mnemonic: &Mnemonic, origin: Origin, now: OffsetDateTime) -> Wallet {
        let fingerprint = mnemonic.fingerprint();
        if let Some(wallet) = self.wallets.iter().find(|wallet| wallet.fingerprint == fingerprint)
        {
            self.active = Some(wallet.id);
            return wallet.clone();
        }

        let wallet = Wallet {
            id: Uuid::new_v4(),
            name: concat_string!("Wallet ", (self.wallets.len() + 1).to_string()),
            fingerprint,
            origin,
            created_at: now,
        };
        self.active = Some(wallet.id);
        self.wallets.push(wallet.clone());
        wallet
    }

    pub fn select(&mut self, id: Uuid) -> bool {
        let known = self.wallets.iter().any(|wallet| wallet.id == id);
        if known {
            self.active = Some(id);
        }
        known
    }

    pub fn active(&self) -> Option<&Wallet> {
        let id = self.active?;
        self.wallets.iter().find(|wallet| wallet.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBackup {
    pub mnemonic: Mnemonic,
    pub challenge: Vec<usize>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("There is no recovery phrase waiting to be verified")]
    NoPendingBackup,
    #[error(transparent)]
    Mnemonic(#[from] MnemonicError),
}

#[derive(Clone, Copy)]
pub struct WalletContext {
    state: Signal<WalletState>,
    pending: Signal<Option<PendingBackup>>,
}

impl WalletContext {
    pub fn use_wallet() -> Self {
        use_context()
    }

    pub fn wallets(&self) -> Vec<Wallet> {
        self.state.read().wallets.clone()
    }

    pub fn active(&self) -> Option<Wallet> {
        self.state.read().active().cloned()
    }

    pub fn select(&mut self, id: Uuid) -> bool {
        self.state.write().select(id)
    }

    pub fn pending(&self) -> Option<PendingBackup> {
        Option::clone(&self.pending.read())
    }

    pub fn begin_backup(&mut self) -> PendingBackup {
        let mut rng = rand::thread_rng();
        let mnemonic = Mnemonic::generate(&mut rng);
        let challenge = mnemonic.challenge(&mut rng);
        let backup = PendingBackup { mnemonic, challenge };
        self.pending.set(Some(backup.clone()));
        backup
    }

    pub fn confirm_backup<S: AsRef<str>>(&mut self, answers: &[S]) -> Result<Wallet, WalletError> {
        let PendingBackup { mnemonic, challenge } =
            self.pending().ok_or(WalletError::NoPendingBackup)?;
        mnemonic.verify(&challenge, answers)?;

        let wallet =
            self.state.write().add(&mnemonic, Origin::Created, OffsetDateTime::now_utc());
        self.pending.set(None);
        tracing::info!(fingerprint = %wallet.fingerprint, "wallet created");
        Ok(wallet)
    }

    pub fn import(&mut self, phrase: &str) -> Result<Wallet, WalletError> {
        let mnemonic: Mnemonic = phrase.parse()?;
        let wallet =
            self.state.write().add(&mnemonic, Origin::Imported, OffsetDateTime::now_utc());
        tracing::info!(fingerprint = %wallet.fingerprint, "wallet imported");
        Ok(wallet)
    }

    #[cfg(test)]
    pub fn use_fixed() -> Self {
        let state = use_signal(WalletState::default);
        let pending = use_signal(Option::default);
        use_context_provider(|| WalletContext { state, pending })
    }

    pub fn discard_pending(&mut self) {
        if self.pending.peek().is_some() {
            self.pending.set(None);
        }
    }
}

#[component]
pub fn WalletProvider(children: Element) -> Element {
    let auth = AuthContext::use_auth();
    let state =
        use_synced_storage::<LocalStorage, WalletState>(WALLET_KEY.into(), WalletState::default);
    let pending = use_signal(Option::default);
    let mut wallet = use_context_provider(|| {
        tracing::debug!(wallets = state.peek().wallets.len(), "wallet provider ready");
        WalletContext { state, pending }
    });

    use_effect(move || {
        if auth.status() == AuthStatus::SignedOut {
            wallet.discard_pending();
        }
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE: &str = "abandon ability able about above absent absorb abstract absurd abuse \
                          access accident";
    const OTHER: &str = "acid acoustic acquire across act action actor actress actual adapt add \
                         addict";

    #[test]
    fn test_add_activates() {
        let mut state = WalletState::default();
        let now = OffsetDateTime::now_utc();

        let first = state.add(&PHRASE.parse().unwrap(), Origin::Created, now);
        assert_eq!(first.name, "Wallet 1");
        assert_eq!(state.active(), Some(&first));

        let second = state.add(&OTHER.parse().unwrap(), Origin::Imported, now);
        assert_eq!(second.name, "Wallet 2");
        assert_eq!(second.origin, Origin::Imported);
        assert_eq!(state.active(), Some(&second));
        assert_eq!(state.wallets.len(), 2);
    }

    #[test]
    fn test_add_known_phrase_reactivates() {
        let mut state = WalletState::default();
        let now = OffsetDateTime::now_utc();

        let first = state.add(&PHRASE.parse().unwrap(), Origin::Created, now);
        state.add(&OTHER.parse().unwrap(), Origin::Created, now);
        let again = state.add(&PHRASE.parse().unwrap(), Origin::Imported, now);

        assert_eq!(again, first);
        assert_eq!(state.wallets.len(), 2);
        assert_eq!(state.active, Some(first.id));
    }

    #[test]
    fn test_select() {
        let mut state = WalletState::default();
        let now = OffsetDateTime::now_utc();
        let first = state.add(&PHRASE.parse().unwrap(), Origin::Created, now);
        state.add(&OTHER.parse().unwrap(), Origin::Created, now);

        assert!(state.select(first.id));
        assert_eq!(state.active(), Some(&first));
        assert!(!state.select(Uuid::new_v4()));
        assert_eq!(state.active(), Some(&first));
    }

    #[test]
    fn test_state_never_serializes_phrase() {
        let mut state = WalletState::default();
        state.add(&PHRASE.parse().unwrap(), Origin::Created, OffsetDateTime::now_utc());
        let json = serde_json::to_string(&state).unwrap();
        assert!(!json.contains("abandon"));
    }
}
