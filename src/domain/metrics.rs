use crate::common::money::Money;
use crate::domain::product::Product;

/// Figures derived for a single product. Recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductMetrics {
    pub remaining_stock: i64,
    pub revenue_sold: Money,
    pub revenue_remaining: Money,
    pub cost_sold: Money,
    pub cost_remaining: Money,
    /// Potential profit over both sold and unsold units, not realized
    /// profit. Unsold inventory counts at full sale value.
    pub profit: Money,
}

/// Totals across the whole collection; every field is the sum of the
/// matching per-product figure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Totals {
    pub units_sold: i64,
    pub units_remaining: i64,
    pub cost_sold: Money,
    pub cost_remaining: Money,
    pub revenue_sold: Money,
    pub revenue_remaining: Money,
    pub profit: Money,
}

pub fn per_product(product: &Product) -> ProductMetrics {
    let remaining = product.remaining();
    let sold = i64::from(product.sold);

    let revenue_sold = product.sale_price * sold;
    let revenue_remaining = product.sale_price * remaining;
    let cost_sold = product.cost_price * sold;
    let cost_remaining = product.cost_price * remaining;
    let profit = revenue_sold + revenue_remaining - (cost_sold + cost_remaining);

    ProductMetrics {
        remaining_stock: remaining,
        revenue_sold,
        revenue_remaining,
        cost_sold,
        cost_remaining,
        profit,
    }
}

/// An empty collection yields all-zero totals.
pub fn aggregate(products: &[Product]) -> Totals {
    let mut totals = Totals::default();

    for product in products {
        let m = per_product(product);

        totals.units_sold += i64::from(product.sold);
        totals.units_remaining += m.remaining_stock;
        totals.cost_sold += m.cost_sold;
        totals.cost_remaining += m.cost_remaining;
        totals.revenue_sold += m.revenue_sold;
        totals.revenue_remaining += m.revenue_remaining;
    }

    totals.profit =
        totals.revenue_sold + totals.revenue_remaining - (totals.cost_sold + totals.cost_remaining);
    totals
}
