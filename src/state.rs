use crate::store::Store;

pub struct AppState {
    pub store: Store,
}
