pub mod mock_anoncreds;
pub mod mock_ledger;
