#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anoncreds_types::data_types::identifiers::{
    cred_def_id::CredentialDefinitionId, issuer_id::IssuerId, schema_id::SchemaId,
};
use aries_vcx_ledger::ledger::dialect::LedgerDialect;
use aries_vcx_wallet::wallet::memory::InMemoryWallet;
use async_trait::async_trait;
use issuance_agent::{
    aries_vcx_issuance::messages::{
        msg_fields::protocols::cred_issuance::CredentialAttr, AriesMessage,
    },
    Agent, AgentConfig, AgentResult, Connection, DefinitionConfig, IssuancePolicy,
    MessageSender,
};
use test_utils::{
    constants::{ISSUER_DID, SCHEMA_ATTRIBUTES, SCHEMA_NAME, SCHEMA_VERSION, TAILS_BASE_URI},
    logger::init_logger,
    mockdata::{mock_anoncreds::MockAnoncreds, mock_ledger::MockLedger},
};
use url::Url;

pub const HOLDER_DID: &str = "7Tqg6BwSSWapxgUDm9KKgg";

pub type TestAgent = Agent<InMemoryWallet, MockAnoncreds, MockLedger>;

/// Records outbound messages instead of delivering them.
#[derive(Default)]
pub struct RecordingMessageSender {
    sent: Mutex<Vec<(Connection, AriesMessage)>>,
}

impl RecordingMessageSender {
    pub fn sent(&self) -> Vec<(Connection, AriesMessage)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn take(&self) -> Vec<AriesMessage> {
        self.sent
            .lock()
            .unwrap()
            .drain(..)
            .map(|(_, message)| message)
            .collect()
    }
}

#[async_trait]
impl MessageSender for RecordingMessageSender {
    async fn send_message(&self, connection: &Connection, message: AriesMessage) -> AgentResult<()> {
        self.sent.lock().unwrap().push((connection.clone(), message));
        Ok(())
    }
}

pub struct TestParty {
    pub agent: TestAgent,
    pub sender: Arc<RecordingMessageSender>,
}

pub struct IssuanceSetup {
    pub ledger: Arc<MockLedger>,
    pub issuer: TestParty,
    pub holder: TestParty,
    pub schema_id: SchemaId,
}

async fn build_party(name: &str, did: &str, ledger: Arc<MockLedger>) -> TestParty {
    let sender = Arc::new(RecordingMessageSender::default());
    let config = AgentConfig::builder()
        .issuer_did(IssuerId::new(did).unwrap())
        .tails_base_uri(Url::parse(TAILS_BASE_URI).unwrap())
        .tails_dir(std::env::temp_dir().join("issuance-agent-tails"))
        .ledger_dialect(ledger.dialect())
        .build();
    let agent = Agent::initialize(
        config,
        Arc::new(InMemoryWallet::new(name)),
        Arc::new(MockAnoncreds::new()),
        ledger,
        sender.clone(),
    )
    .await
    .unwrap();
    TestParty { agent, sender }
}

/// An issuer and a holder with separate wallets over one ledger, the issuer's schema
/// already published.
pub async fn setup(dialect: LedgerDialect) -> IssuanceSetup {
    init_logger();
    let ledger = Arc::new(MockLedger::new(dialect));
    let issuer = build_party("issuer", ISSUER_DID, ledger.clone()).await;
    let holder = build_party("holder", HOLDER_DID, ledger.clone()).await;
    let schema_id = issuer
        .agent
        .schemas()
        .create_schema(
            issuer.agent.issuer_did(),
            SCHEMA_NAME,
            SCHEMA_VERSION,
            SCHEMA_ATTRIBUTES.iter().map(|attr| attr.to_string()).collect(),
        )
        .await
        .unwrap();
    IssuanceSetup {
        ledger,
        issuer,
        holder,
        schema_id,
    }
}

impl IssuanceSetup {
    pub fn definition_config(&self) -> DefinitionConfig {
        DefinitionConfig::builder()
            .issuer_id(self.issuer.agent.issuer_did().clone())
            .schema_id(self.schema_id.clone())
            .build()
    }

    pub async fn create_cred_def(&self, config: DefinitionConfig) -> CredentialDefinitionId {
        self.issuer
            .agent
            .cred_defs()
            .create_cred_def(config)
            .await
            .unwrap()
    }

    pub async fn create_revocable_cred_def(
        &self,
        max_credential_count: u32,
        auto_scale: bool,
        issuance_policy: IssuancePolicy,
    ) -> CredentialDefinitionId {
        let config = DefinitionConfig::builder()
            .issuer_id(self.issuer.agent.issuer_did().clone())
            .schema_id(self.schema_id.clone())
            .enable_revocation(true)
            .max_credential_count(max_credential_count)
            .auto_scale(auto_scale)
            .issuance_policy(issuance_policy)
            .build();
        self.create_cred_def(config).await
    }

    /// Runs a connectionless exchange up to the issuer's credential, which the holder
    /// has not processed yet. Returns the thread id.
    pub async fn offer_and_request(
        &self,
        cred_def_id: &CredentialDefinitionId,
        attributes: Vec<CredentialAttr>,
    ) -> AgentResult<String> {
        let offer = self
            .issuer
            .agent
            .issuer()
            .create_offer(cred_def_id, Some(attributes), None)
            .await?;
        let thread_id = self.holder.agent.holder().process_offer(offer, None).await?;
        let request = self.holder.agent.holder().create_request(&thread_id).await?;
        self.issuer
            .agent
            .issuer()
            .process_credential_request(request, None)
            .await?;
        Ok(thread_id)
    }

    /// Full connectionless exchange. Returns the thread id.
    pub async fn issue(
        &self,
        cred_def_id: &CredentialDefinitionId,
        attributes: Vec<CredentialAttr>,
    ) -> AgentResult<String> {
        let thread_id = self.offer_and_request(cred_def_id, attributes).await?;
        let credential = self
            .issuer
            .agent
            .issuer()
            .create_credential(&thread_id, None)
            .await?;
        self.holder
            .agent
            .holder()
            .process_credential(credential, None)
            .await?;
        Ok(thread_id)
    }
}

pub fn attributes(name: &str) -> Vec<CredentialAttr> {
    vec![
        CredentialAttr::builder().name("name").value(name).build(),
        CredentialAttr::builder().name("age").value("28").build(),
        CredentialAttr::builder().name("sex").value("female").build(),
        CredentialAttr::builder().name("height").value("175").build(),
    ]
}
