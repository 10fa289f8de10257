pub mod utils;

use std::sync::Arc;

use anoncreds_types::data_types::identifiers::issuer_id::IssuerId;
use aries_vcx_ledger::ledger::dialect::LedgerDialect;
use aries_vcx_wallet::wallet::memory::InMemoryWallet;
use issuance_agent::{Agent, AgentConfig, AgentErrorKind, DefinitionConfig};
use test_utils::{
    constants::{ISSUER_DID, SCHEMA_ATTRIBUTES, SCHEMA_NAME, SCHEMA_VERSION},
    logger::init_logger,
    mockdata::{
        mock_anoncreds::MockAnoncreds,
        mock_ledger::{LedgerWriteKind, MockLedger},
    },
};

use crate::utils::{RecordingMessageSender, TestAgent};

async fn agent_without_tails(wallet: Arc<InMemoryWallet>, ledger: Arc<MockLedger>) -> TestAgent {
    let config = AgentConfig::builder()
        .issuer_did(IssuerId::new(ISSUER_DID).unwrap())
        .build();
    Agent::initialize(
        config,
        wallet,
        Arc::new(MockAnoncreds::new()),
        ledger,
        Arc::new(RecordingMessageSender::default()),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_agent_restarts_over_existing_wallet() {
    init_logger();
    let wallet = Arc::new(InMemoryWallet::new("restart"));
    let ledger = Arc::new(MockLedger::new(LedgerDialect::Legacy));

    let first = agent_without_tails(wallet.clone(), ledger.clone()).await;
    let schema_id = first
        .schemas()
        .create_schema(
            first.issuer_did(),
            SCHEMA_NAME,
            SCHEMA_VERSION,
            SCHEMA_ATTRIBUTES.iter().map(|attr| attr.to_string()).collect(),
        )
        .await
        .unwrap();

    let second = agent_without_tails(wallet, ledger).await;
    assert_eq!(second.holder().link_secret_id(), first.holder().link_secret_id());
    assert_eq!(
        second.schemas().get_schema(&schema_id).await.unwrap().id,
        schema_id
    );
}

#[tokio::test]
async fn test_revocation_requires_tails_base_uri() {
    init_logger();
    let ledger = Arc::new(MockLedger::new(LedgerDialect::Legacy));
    let agent = agent_without_tails(Arc::new(InMemoryWallet::new("no-tails")), ledger.clone()).await;
    let schema_id = agent
        .schemas()
        .create_schema(
            agent.issuer_did(),
            SCHEMA_NAME,
            SCHEMA_VERSION,
            SCHEMA_ATTRIBUTES.iter().map(|attr| attr.to_string()).collect(),
        )
        .await
        .unwrap();
    let config = DefinitionConfig::builder()
        .issuer_id(agent.issuer_did().clone())
        .schema_id(schema_id.clone())
        .enable_revocation(true)
        .build();

    let err = agent.cred_defs().create_cred_def(config).await.unwrap_err();
    assert_eq!(err.kind(), AgentErrorKind::InvalidConfiguration);
    assert_eq!(ledger.write_count(LedgerWriteKind::CredDef), 0);

    let config = DefinitionConfig::builder()
        .issuer_id(agent.issuer_did().clone())
        .schema_id(schema_id)
        .build();
    let cred_def_id = agent.cred_defs().create_cred_def(config).await.unwrap();
    let definition = agent.cred_defs().get_cred_def(&cred_def_id).await.unwrap();
    assert_eq!(definition.current_rev_reg_id, None);
}

#[tokio::test]
async fn test_zero_capacity_registry_is_refused() {
    let setup = utils::setup(LedgerDialect::Legacy).await;
    let config = DefinitionConfig::builder()
        .issuer_id(setup.issuer.agent.issuer_did().clone())
        .schema_id(setup.schema_id.clone())
        .enable_revocation(true)
        .max_credential_count(0)
        .build();

    let err = setup
        .issuer
        .agent
        .cred_defs()
        .create_cred_def(config)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), AgentErrorKind::InvalidConfiguration);
}

#[tokio::test]
async fn test_connections_are_listed() {
    let setup = utils::setup(LedgerDialect::Legacy).await;
    let connections = setup.issuer.agent.connections();
    let id = connections
        .create_connection("7Tqg6BwSSWapxgUDm9KKgg", Some("holder".into()))
        .await
        .unwrap();

    let listed = connections.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].label.as_deref(), Some("holder"));

    let err = connections.get_by_id("unknown").await.unwrap_err();
    assert_eq!(err.kind(), AgentErrorKind::RecordNotFound);
}
