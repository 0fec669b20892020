use std::sync::Arc;

use crate::n2yo::N2yoClient;
use crate::position::PositionResolver;
use crate::refresh::Refresher;

#[derive(Clone)]
pub struct AppState {
    pub resolver: PositionResolver,
    pub refresher: Arc<Refresher<N2yoClient>>,
}
