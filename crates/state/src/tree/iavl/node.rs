// Path: crates/state/src/tree/iavl/node.rs

use super::encode;
use ticketchain_crypto::algorithms::hash::sha256;
use ticketchain_types::error::StateError;

/// A hash representing a child node.
pub(crate) type NodeHash = [u8; 32];
/// A canonical hash for an empty/nil child node.
pub(crate) const EMPTY_HASH: NodeHash = [0; 32];

/// IAVL tree node with immutable structure. References children by hash so
/// that unmodified subtrees can be shared between versions.
#[derive(Debug, Clone)]
pub(crate) struct IAVLNode {
    pub(crate) key: Vec<u8>,
    pub(crate) value: Vec<u8>,
    pub(crate) version: u64,
    pub(crate) height: i32,
    pub(crate) size: u64,
    /// The hash of this node's canonical representation.
    pub hash: NodeHash,
    /// The hash of the left child, if it exists.
    pub left_hash: Option<NodeHash>,
    /// The hash of the right child, if it exists.
    pub right_hash: Option<NodeHash>,
}

impl IAVLNode {
    /// Create a new leaf node and compute its hash.
    pub(crate) fn new_leaf(key: Vec<u8>, value: Vec<u8>, version: u64) -> Result<Self, StateError> {
        let mut node = Self {
            key,
            value,
            version,
            height: 0,
            size: 1,
            hash: EMPTY_HASH,
            left_hash: None,
            right_hash: None,
        };
        node.hash = node.compute_hash()?;
        Ok(node)
    }

    /// Computes the hash of this node according to the canonical encoding.
    pub(crate) fn compute_hash(&self) -> Result<NodeHash, StateError> {
        if self.is_leaf() {
            let value_hash = sha256(&self.value).map_err(|e| StateError::Backend(e.to_string()))?;

            let mut preimage = vec![0x00];
            prost::encode_length_delimiter(self.key.len(), &mut preimage)
                .map_err(|e| StateError::Backend(format!("encode key len: {e}")))?;
            preimage.extend_from_slice(&self.key);

            prost::encode_length_delimiter(value_hash.len(), &mut preimage)
                .map_err(|e| StateError::Backend(format!("encode value_hash len: {e}")))?;
            preimage.extend_from_slice(&value_hash);

            return sha256(&preimage).map_err(|e| StateError::Backend(e.to_string()));
        }
        let data = encode::encode_node_canonical(self)?;
        sha256(&data).map_err(|e| StateError::Backend(e.to_string()))
    }

    /// Checks if this is a leaf node.
    pub(crate) fn is_leaf(&self) -> bool {
        self.left_hash.is_none() && self.right_hash.is_none()
    }

    /// Reconstructs an `IAVLNode` from the raw parts produced by the decoder.
    pub(crate) fn from_decoded(decoded: encode::DecodedNode) -> Result<Self, StateError> {
        let mut node = IAVLNode {
            key: if decoded.is_leaf {
                decoded.key
            } else {
                decoded.split_key
            },
            value: decoded.value,
            version: decoded.version,
            height: decoded.height,
            size: decoded.size,
            hash: EMPTY_HASH,
            left_hash: (decoded.left_hash != EMPTY_HASH).then_some(decoded.left_hash),
            right_hash: (decoded.right_hash != EMPTY_HASH).then_some(decoded.right_hash),
        };
        node.hash = node.compute_hash()?;
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_hash_is_deterministic() {
        let a = IAVLNode::new_leaf(b"k".to_vec(), b"v".to_vec(), 1).unwrap();
        let b = IAVLNode::new_leaf(b"k".to_vec(), b"v".to_vec(), 1).unwrap();
        assert_eq!(a.hash, b.hash);
    }

    #[test]
    fn differing_values_hash_differently() {
        let a = IAVLNode::new_leaf(b"k".to_vec(), b"v1".to_vec(), 1).unwrap();
        let b = IAVLNode::new_leaf(b"k".to_vec(), b"v2".to_vec(), 1).unwrap();
        assert_ne!(a.hash, b.hash);
    }
}
