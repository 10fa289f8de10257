use bitvec::vec::BitVec;
use serde_json::Value;

use crate::data_types::{
    identifiers::{issuer_id::IssuerId, rev_reg_def_id::RevocationRegistryDefinitionId},
    ledger::{
        rev_reg_def::IssuanceType,
        rev_reg_delta::{RevocationRegistryDelta, RevocationRegistryDeltaValue},
    },
};

/// Revocation state of every index of a registry at `timestamp`. A set bit means the
/// credential at that index is revoked. Credential revocation indices are 1-based and
/// index `i` lives at bit `i - 1`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevocationStatusList {
    pub rev_reg_def_id: RevocationRegistryDefinitionId,
    pub issuer_id: IssuerId,
    #[serde(with = "serde_revocation_list")]
    pub revocation_list: BitVec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_accumulator: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

impl RevocationStatusList {
    pub fn new(
        rev_reg_def_id: RevocationRegistryDefinitionId,
        issuer_id: IssuerId,
        issuance_type: IssuanceType,
        capacity: u32,
        current_accumulator: Option<Value>,
        timestamp: Option<u64>,
    ) -> Self {
        let initial = matches!(issuance_type, IssuanceType::ISSUANCE_ON_DEMAND);
        Self {
            rev_reg_def_id,
            issuer_id,
            revocation_list: BitVec::repeat(initial, capacity as usize),
            current_accumulator,
            timestamp,
        }
    }

    pub fn capacity(&self) -> u32 {
        u32::try_from(self.revocation_list.len()).unwrap_or(u32::MAX)
    }

    fn position(&self, index: u32) -> crate::Result<usize> {
        if index == 0 || index > self.capacity() {
            return Err(err_msg!(
                InvalidUserRevocId,
                "Index {index} is outside of registry {} with capacity {}",
                self.rev_reg_def_id,
                self.capacity()
            ));
        }
        Ok(index as usize - 1)
    }

    pub fn is_revoked(&self, index: u32) -> crate::Result<bool> {
        let position = self.position(index)?;
        Ok(self.revocation_list[position])
    }

    /// Marks `index` revoked, returning whether its bit actually changed.
    pub fn revoke(&mut self, index: u32) -> crate::Result<bool> {
        let position = self.position(index)?;
        let changed = !self.revocation_list[position];
        self.revocation_list.set(position, true);
        Ok(changed)
    }

    /// Marks `index` valid, returning whether its bit actually changed.
    pub fn activate(&mut self, index: u32) -> crate::Result<bool> {
        let position = self.position(index)?;
        let changed = self.revocation_list[position];
        self.revocation_list.set(position, false);
        Ok(changed)
    }

    pub fn revoked_indices(&self) -> Vec<u32> {
        self.revocation_list
            .iter_ones()
            .filter_map(|position| u32::try_from(position + 1).ok())
            .collect()
    }

    /// Ledger delta turning `previous` into `self`.
    pub fn delta_from(&self, previous: &Self) -> crate::Result<RevocationRegistryDelta> {
        if previous.revocation_list.len() != self.revocation_list.len() {
            return Err(err_msg!(
                InvalidState,
                "Status lists of registry {} differ in capacity",
                self.rev_reg_def_id
            ));
        }
        let accum = self.current_accumulator.clone().ok_or_else(|| {
            err_msg!(
                InvalidState,
                "Status list of registry {} carries no accumulator",
                self.rev_reg_def_id
            )
        })?;

        let mut issued = vec![];
        let mut revoked = vec![];
        for (position, (before, after)) in previous
            .revocation_list
            .iter()
            .zip(self.revocation_list.iter())
            .enumerate()
        {
            let index = u32::try_from(position + 1)
                .map_err(|_| err_msg!(Unexpected, "Registry index overflow"))?;
            match (*before, *after) {
                (false, true) => revoked.push(index),
                (true, false) => issued.push(index),
                _ => {}
            }
        }

        Ok(RevocationRegistryDelta {
            rev_reg_def_id: self.rev_reg_def_id.clone(),
            value: RevocationRegistryDeltaValue {
                prev_accum: previous.current_accumulator.clone(),
                accum,
                issued,
                revoked,
            },
            timestamp: self.timestamp.unwrap_or_default(),
        })
    }

    /// Applies a ledger delta on top of this list.
    pub fn apply_delta(&mut self, delta: &RevocationRegistryDelta) -> crate::Result<()> {
        for index in &delta.value.issued {
            self.activate(*index)?;
        }
        for index in &delta.value.revoked {
            self.revoke(*index)?;
        }
        self.current_accumulator = Some(delta.value.accum.clone());
        self.timestamp = Some(delta.timestamp);
        Ok(())
    }
}

pub mod serde_revocation_list {
    use bitvec::vec::BitVec;
    use serde::{
        de::{Error as DeError, SeqAccess, Visitor},
        ser::SerializeSeq,
        Deserializer, Serializer,
    };

    pub fn serialize<S>(state: &BitVec, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = s.serialize_seq(Some(state.len()))?;
        for element in state {
            let e = i32::from(*element);
            seq.serialize_element(&e)?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BitVec, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct JsonBitStringVisitor;

        impl<'de> Visitor<'de> for JsonBitStringVisitor {
            type Value = BitVec;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(
                    formatter,
                    "a seq containing revocation state, i.e. [1, 0, 1]"
                )
            }

            fn visit_seq<S>(self, mut v: S) -> Result<Self::Value, S::Error>
            where
                S: SeqAccess<'de>,
            {
                let mut bv = BitVec::with_capacity(v.size_hint().unwrap_or_default());
                while let Some(ele) = v.next_element::<i32>()? {
                    match ele {
                        0 => bv.push(false),
                        1 => bv.push(true),
                        _ => {
                            return Err(S::Error::custom("invalid revocation state"));
                        }
                    }
                }
                Ok(bv)
            }
        }
        deserializer.deserialize_seq(JsonBitStringVisitor)
    }
}
