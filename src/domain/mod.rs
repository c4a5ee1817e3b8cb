//! Domain layer - view-model records projected from on-chain state.
//!
//! Everything here is a read-only projection: records are created and
//! mutated exclusively by the external contracts, and the crate only
//! reshapes what it reads. No type in this module touches the chain.

pub mod address;
pub mod ingredient;
pub mod product;
pub mod user;

pub use address::Address;
pub use ingredient::IngredientRecord;
pub use product::{ApprovalResponse, ProductRecord, ProductStatus, ProductTrace};
pub use user::{Role, RoleProfile, RoleStats, UserRecord};
