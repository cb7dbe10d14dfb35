//! The stored document and the [`Entity`] trait tying models to it.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use shared::models::{Customer, CustomerPortal, Order, Product, SystemLog, User, Visit};

/// Everything the server persists, as one flat document.
///
/// Collections missing from the file deserialize as empty, so documents
/// written by older builds (or a brand-new empty file) load cleanly. Unknown
/// top-level keys are ignored on read and dropped on the next write.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub visits: Vec<Visit>,
    #[serde(default)]
    pub customer_portals: Vec<CustomerPortal>,
    #[serde(default)]
    pub system_logs: Vec<SystemLog>,
}

/// A model that lives in one of the document's collections.
///
/// Implementations wire a type to its slot so [`Collection`] can offer the
/// same CRUD surface over every resource family.
///
/// [`Collection`]: super::Collection
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Singular label used in error and delete messages ("Product", ...).
    const LABEL: &'static str;

    fn id(&self) -> &str;
    fn collection(doc: &Document) -> &Vec<Self>;
    fn collection_mut(doc: &mut Document) -> &mut Vec<Self>;
}

macro_rules! impl_entity {
    ($type:ty, $label:literal, $field:ident) => {
        impl Entity for $type {
            const LABEL: &'static str = $label;

            fn id(&self) -> &str {
                &self.id
            }

            fn collection(doc: &Document) -> &Vec<Self> {
                &doc.$field
            }

            fn collection_mut(doc: &mut Document) -> &mut Vec<Self> {
                &mut doc.$field
            }
        }
    };
}

impl_entity!(Product, "Product", products);
impl_entity!(Customer, "Customer", customers);
impl_entity!(Order, "Order", orders);
impl_entity!(User, "User", users);
impl_entity!(Visit, "Visit", visits);
impl_entity!(CustomerPortal, "Customer portal", customer_portals);
impl_entity!(SystemLog, "System log", system_logs);
