use std::sync::Arc;

use aries_vcx_anoncreds::{
    anoncreds::{base_anoncreds::BaseAnonCreds, tails::TailsFileCache},
    errors::error::VcxAnoncredsError,
};
use aries_vcx_ledger::ledger::base_ledger::{AnoncredsLedgerRead, AnoncredsLedgerWrite};
use aries_vcx_wallet::wallet::base_wallet::BaseWallet;

use crate::{
    agent::{agent_config::AgentConfig, agent_struct::Agent},
    error::AgentResult,
    handlers::{
        connection::ServiceConnections, credential_definition::ServiceCredentialDefinitions,
        holder::ServiceCredentialsHolder, issuer::ServiceCredentialsIssuer,
        revocation_registry::ServiceRevocationRegistries, schema::ServiceSchemas,
    },
    transport::MessageSender,
};

impl<W, A, L> Agent<W, A, L>
where
    W: BaseWallet,
    A: BaseAnonCreds,
    L: AnoncredsLedgerRead + AnoncredsLedgerWrite,
{
    /// Wires the services over the given collaborators and makes sure the holder's link
    /// secret exists.
    pub async fn initialize(
        config: AgentConfig,
        wallet: Arc<W>,
        anoncreds: Arc<A>,
        ledger: Arc<L>,
        sender: Arc<dyn MessageSender>,
    ) -> AgentResult<Self> {
        config.validate()?;
        info!(
            "Initializing agent of {} (dialect: {:?}, revocation: {})",
            config.issuer_did,
            config.ledger_dialect,
            config.tails_base_uri.is_some()
        );

        let tails_cache = Arc::new(TailsFileCache::new(config.tails_cache_capacity));
        let connections = Arc::new(ServiceConnections::new(wallet.clone(), sender));
        let schemas = Arc::new(ServiceSchemas::new(
            ledger.clone(),
            anoncreds.clone(),
            wallet.clone(),
        ));
        let rev_regs = Arc::new(ServiceRevocationRegistries::new(
            ledger.clone(),
            anoncreds.clone(),
            wallet.clone(),
            config.issuer_did.clone(),
            config.tails_dir.clone(),
            config.tails_base_uri.clone(),
            tails_cache.clone(),
        ));
        let cred_defs = Arc::new(ServiceCredentialDefinitions::new(
            ledger.clone(),
            anoncreds.clone(),
            wallet.clone(),
            rev_regs.clone(),
        ));
        let issuer = Arc::new(ServiceCredentialsIssuer::new(
            anoncreds.clone(),
            wallet.clone(),
            config.record_retry,
            connections.clone(),
            cred_defs.clone(),
            rev_regs.clone(),
        ));
        let holder = Arc::new(ServiceCredentialsHolder::new(
            ledger.clone(),
            anoncreds.clone(),
            wallet.clone(),
            config.record_retry,
            connections.clone(),
        ));

        match anoncreds
            .prover_create_link_secret(wallet.as_ref(), &holder.link_secret_id().to_string())
            .await
        {
            Ok(()) | Err(VcxAnoncredsError::DuplicationMasterSecret(_)) => {}
            Err(err) => return Err(err.into()),
        }

        Ok(Self {
            config,
            ledger,
            anoncreds,
            wallet,
            tails_cache,
            connections,
            schemas,
            cred_defs,
            rev_regs,
            holder,
            issuer,
        })
    }
}
