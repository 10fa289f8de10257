//! Module containing the `acks` messages, as defined in the [RFC](<https://github.com/hyperledger/aries-rfcs/blob/main/features/0015-acks/README.md>).

pub mod ack;
