//! Product view models, lifecycle status, and approval responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{
    LABEL_APPROVED, LABEL_CREATED, LABEL_PENDING, LABEL_REJECTED, LABEL_UNKNOWN,
};
use crate::domain::Address;

/// Lifecycle stage of a submitted product.
///
/// Transitions are driven entirely by contract-side approval logic; the
/// client only ever reads the current stage. `Unknown` covers any code
/// outside the contract's enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Created,
    Pending,
    Approved,
    Rejected,
    Unknown,
}

impl ProductStatus {
    /// Map a raw contract status code to a status.
    pub fn from_code(code: u64) -> Self {
        match code {
            0 => ProductStatus::Created,
            1 => ProductStatus::Pending,
            2 => ProductStatus::Approved,
            3 => ProductStatus::Rejected,
            _ => ProductStatus::Unknown,
        }
    }

    /// Fixed display label table.
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Created => LABEL_CREATED,
            ProductStatus::Pending => LABEL_PENDING,
            ProductStatus::Approved => LABEL_APPROVED,
            ProductStatus::Rejected => LABEL_REJECTED,
            ProductStatus::Unknown => LABEL_UNKNOWN,
        }
    }

    /// True while suppliers can still respond (Created or Pending).
    pub fn is_open(&self) -> bool {
        matches!(self, ProductStatus::Created | ProductStatus::Pending)
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single supplier's recorded response to a product.
///
/// The contract stores 0 = no response, 1 = approved, 2 = rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalResponse {
    None,
    Approved,
    Rejected,
}

impl ApprovalResponse {
    pub fn from_code(code: u64) -> Self {
        match code {
            1 => ApprovalResponse::Approved,
            2 => ApprovalResponse::Rejected,
            _ => ApprovalResponse::None,
        }
    }

    /// The approved/rejected distinction is intentionally collapsed here;
    /// dashboards only need "has this supplier answered yet".
    pub fn has_responded(&self) -> bool {
        !matches!(self, ApprovalResponse::None)
    }
}

/// A fully-detailed product registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    pub id: u64,
    pub name: String,
    pub batch_id: String,
    /// Ordered ingredient references, as registered.
    pub ingredient_ids: Vec<u64>,
    /// Suppliers expected to approve this product.
    pub suppliers: Vec<Address>,
    /// Approvals received so far; never exceeds `total`.
    pub approved: u64,
    /// Approvals required in total.
    pub total: u64,
    pub status: ProductStatus,
    /// Creation time in epoch seconds.
    pub created_at: u64,
    /// Approval time in epoch seconds; 0 until approved.
    pub approved_at: u64,
}

impl ProductRecord {
    /// Whether the given supplier is in this product's approval set.
    pub fn involves_supplier(&self, supplier: &Address) -> bool {
        self.suppliers.contains(supplier)
    }

    /// True while the approval workflow is still open.
    pub fn awaiting_approval(&self) -> bool {
        self.status.is_open()
    }

    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }

    /// Creation time as a UTC timestamp, when representable.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::try_from(self.created_at).ok()?, 0)
    }
}

/// Denormalized consumer-facing trace of a product: the product joined
/// with resolved ingredient names/categories and supplier display names.
/// Built by fan-out lookups, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductTrace {
    pub product_name: String,
    pub batch_id: String,
    pub ingredient_names: Vec<String>,
    pub ingredient_categories: Vec<String>,
    pub suppliers: Vec<Address>,
    /// Resolved display names, index-aligned with `suppliers`.
    pub supplier_names: Vec<String>,
    pub created_at: u64,
    pub approved_at: u64,
    pub status: ProductStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(tag: &str) -> Address {
        let hex: String = tag.chars().cycle().take(40).collect();
        Address::parse(&format!("0x{}", hex)).unwrap()
    }

    #[test]
    fn status_codes_map_to_fixed_lookup() {
        assert_eq!(ProductStatus::from_code(0), ProductStatus::Created);
        assert_eq!(ProductStatus::from_code(1), ProductStatus::Pending);
        assert_eq!(ProductStatus::from_code(2), ProductStatus::Approved);
        assert_eq!(ProductStatus::from_code(3), ProductStatus::Rejected);
        assert_eq!(ProductStatus::from_code(7), ProductStatus::Unknown);
    }

    #[test]
    fn status_labels_and_openness() {
        assert_eq!(ProductStatus::Pending.label(), "Pending");
        assert_eq!(ProductStatus::Unknown.label(), "Unknown");
        assert!(ProductStatus::Created.is_open());
        assert!(ProductStatus::Pending.is_open());
        assert!(!ProductStatus::Approved.is_open());
        assert!(!ProductStatus::Rejected.is_open());
    }

    #[test]
    fn approval_response_collapses_to_bool() {
        assert!(!ApprovalResponse::from_code(0).has_responded());
        assert!(ApprovalResponse::from_code(1).has_responded());
        assert!(ApprovalResponse::from_code(2).has_responded());
        // Codes outside the enumeration read as "no response"
        assert!(!ApprovalResponse::from_code(9).has_responded());
    }

    #[test]
    fn supplier_involvement() {
        let product = ProductRecord {
            id: 7,
            name: "Tomato Sauce".into(),
            batch_id: "B-2024-001".into(),
            ingredient_ids: vec![1, 2],
            suppliers: vec![addr("a"), addr("b")],
            approved: 1,
            total: 2,
            status: ProductStatus::Pending,
            created_at: 1_700_000_000,
            approved_at: 0,
        };
        assert!(product.involves_supplier(&addr("a")));
        assert!(!product.involves_supplier(&addr("c")));
        assert!(product.awaiting_approval());
    }
}
