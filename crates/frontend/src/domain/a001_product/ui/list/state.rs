use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const STORAGE_KEY: &str = "a001_product_list_state_v1";

#[derive(Clone, Debug, Serialize, Deserialize)]
struct PersistedState {
    pub q: String,
}

#[derive(Clone, Debug, Default)]
pub struct ProductListState {
    // filter
    pub q: String,

    // product ids with their batch rows shown
    pub expanded: HashSet<String>,
}

impl ProductListState {
    pub fn toggle(&mut self, product_id: &str) {
        if !self.expanded.remove(product_id) {
            self.expanded.insert(product_id.to_string());
        }
    }

    pub fn is_expanded(&self, product_id: &str) -> bool {
        self.expanded.contains(product_id)
    }

    /// Products matching the search query, in server order
    pub fn filter(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| p.matches(&self.q))
            .cloned()
            .collect()
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_persisted() -> Option<PersistedState> {
    let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    serde_json::from_str::<PersistedState>(&raw).ok()
}

fn save_persisted(st: &PersistedState) {
    let Some(storage) = storage() else { return };
    let Ok(raw) = serde_json::to_string(st) else { return };
    let _ = storage.set_item(STORAGE_KEY, &raw);
}

pub fn persist_state(signal: RwSignal<ProductListState>) {
    let q = signal.with_untracked(|st| st.q.clone());
    save_persisted(&PersistedState { q });
}

pub fn create_state() -> RwSignal<ProductListState> {
    let mut st = ProductListState::default();
    if let Some(p) = load_persisted() {
        st.q = p.q;
    }
    RwSignal::new(st)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::aggregate::ProductId;

    fn product(id: &str, name: &str) -> Product {
        Product {
            product_id: ProductId::new(id),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_toggle() {
        let mut st = ProductListState::default();
        st.toggle("urea-gold");
        assert!(st.is_expanded("urea-gold"));
        st.toggle("urea-gold");
        assert!(!st.is_expanded("urea-gold"));
    }

    #[test]
    fn test_filter_by_name_or_id() {
        let products = vec![product("urea-gold", "Urea Gold"), product("dap-plus", "DAP Plus")];
        let mut st = ProductListState::default();
        assert_eq!(st.filter(&products).len(), 2);

        st.q = "gold".into();
        let found = st.filter(&products);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Urea Gold");

        st.q = "dap-".into();
        assert_eq!(st.filter(&products)[0].name, "DAP Plus");
    }
}
