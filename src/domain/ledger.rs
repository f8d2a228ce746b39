use crate::common::{error::LedgerError, money::Money};
use crate::domain::product::Product;
use crate::domain::snapshot::{Snapshot, StoredProduct};

/// Owns the product collection and the identifier sequence.
///
/// Products keep their insertion order, which is also the display order.
/// Identifiers start at 1, grow monotonically, and are never reused, not
/// even after removals or a clear. Validation of incoming data lives in
/// the handlers; this type only guards its own bookkeeping.
#[derive(Debug)]
pub struct Ledger {
    products: Vec<Product>,
    next_id: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn get(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Appends a product under a freshly allocated identifier and returns it.
    pub fn insert(
        &mut self,
        name: String,
        cost_price: Money,
        sale_price: Money,
        stock: u32,
        sold: u32,
    ) -> &Product {
        let id = self.next_id;
        self.next_id += 1;
        self.products.push(Product {
            id,
            name,
            cost_price,
            sale_price,
            stock,
            sold,
        });
        self.products.last().expect("product just pushed")
    }

    /// Removes the product with the given id. Absent ids are a no-op.
    pub fn remove(&mut self, id: u64) {
        self.products.retain(|p| p.id != id);
    }

    /// Removes all products. The identifier counter keeps counting.
    pub fn clear(&mut self) {
        self.products.clear();
    }

    /// Read-only export of the current state for persistence.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            products: self.products.iter().map(StoredProduct::from).collect(),
            id_counter: self.next_id as i64,
        }
    }

    /// Replaces the ledger state wholesale from a persisted snapshot.
    ///
    /// All-or-nothing: a negative id counter or an unparseable stored
    /// price fails with `Restore` and leaves the current state untouched.
    /// Per-product sold/stock consistency is NOT re-checked; the snapshot
    /// is trusted as saved.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<(), LedgerError> {
        let next_id = u64::try_from(snapshot.id_counter).map_err(|_| {
            LedgerError::Restore(format!("id counter {} is negative", snapshot.id_counter))
        })?;

        let mut products = Vec::with_capacity(snapshot.products.len());
        for stored in snapshot.products {
            products.push(Product::try_from(stored)?);
        }

        self.products = products;
        self.next_id = next_id;
        Ok(())
    }
}
