use std::sync::Arc;

use anoncreds_types::data_types::identifiers::issuer_id::IssuerId;
use aries_vcx_anoncreds::anoncreds::{base_anoncreds::BaseAnonCreds, tails::TailsFileCache};
use aries_vcx_ledger::ledger::base_ledger::{AnoncredsLedgerRead, AnoncredsLedgerWrite};
use aries_vcx_wallet::wallet::base_wallet::BaseWallet;

use crate::{
    agent::agent_config::AgentConfig,
    handlers::{
        connection::ServiceConnections, credential_definition::ServiceCredentialDefinitions,
        holder::ServiceCredentialsHolder, issuer::ServiceCredentialsIssuer,
        revocation_registry::ServiceRevocationRegistries, schema::ServiceSchemas,
    },
};

pub struct Agent<W, A, L> {
    pub(super) config: AgentConfig,
    pub(super) ledger: Arc<L>,
    pub(super) anoncreds: Arc<A>,
    pub(super) wallet: Arc<W>,
    pub(super) tails_cache: Arc<TailsFileCache>,
    pub(super) connections: Arc<ServiceConnections<W>>,
    pub(super) schemas: Arc<ServiceSchemas<W, A, L>>,
    pub(super) cred_defs: Arc<ServiceCredentialDefinitions<W, A, L>>,
    pub(super) rev_regs: Arc<ServiceRevocationRegistries<W, A, L>>,
    pub(super) holder: Arc<ServiceCredentialsHolder<W, A, L>>,
    pub(super) issuer: Arc<ServiceCredentialsIssuer<W, A, L>>,
}

// Note: We do this manually, otherwise compiler is requesting us to implement Clone for the
// generic types, which is not in fact needed - each of them is wrapped in Arc.
impl<W, A, L> Clone for Agent<W, A, L> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            ledger: self.ledger.clone(),
            anoncreds: self.anoncreds.clone(),
            wallet: self.wallet.clone(),
            tails_cache: self.tails_cache.clone(),
            connections: self.connections.clone(),
            schemas: self.schemas.clone(),
            cred_defs: self.cred_defs.clone(),
            rev_regs: self.rev_regs.clone(),
            holder: self.holder.clone(),
            issuer: self.issuer.clone(),
        }
    }
}

impl<W, A, L> Agent<W, A, L>
where
    W: BaseWallet,
    A: BaseAnonCreds,
    L: AnoncredsLedgerRead + AnoncredsLedgerWrite,
{
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn issuer_did(&self) -> &IssuerId {
        &self.config.issuer_did
    }

    pub fn ledger(&self) -> Arc<L> {
        self.ledger.clone()
    }

    pub fn anoncreds(&self) -> Arc<A> {
        self.anoncreds.clone()
    }

    pub fn wallet(&self) -> Arc<W> {
        self.wallet.clone()
    }

    pub fn tails_cache(&self) -> Arc<TailsFileCache> {
        self.tails_cache.clone()
    }

    pub fn connections(&self) -> Arc<ServiceConnections<W>> {
        self.connections.clone()
    }

    pub fn schemas(&self) -> Arc<ServiceSchemas<W, A, L>> {
        self.schemas.clone()
    }

    pub fn cred_defs(&self) -> Arc<ServiceCredentialDefinitions<W, A, L>> {
        self.cred_defs.clone()
    }

    pub fn rev_regs(&self) -> Arc<ServiceRevocationRegistries<W, A, L>> {
        self.rev_regs.clone()
    }

    pub fn issuer(&self) -> Arc<ServiceCredentialsIssuer<W, A, L>> {
        self.issuer.clone()
    }

    pub fn holder(&self) -> Arc<ServiceCredentialsHolder<W, A, L>> {
        self.holder.clone()
    }
}
