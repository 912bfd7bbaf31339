use std::sync::Arc;

use atelier_order_db::OrderStore;

use crate::config::PaymentConfig;
use crate::gateway::RazorpayClient;

pub struct AppState {
    pub config: Arc<PaymentConfig>,
    pub gateway: RazorpayClient,
    /// Best-effort local bookkeeping; `None` disables it entirely.
    pub store: Option<Arc<dyn OrderStore>>,
}

impl AppState {
    pub fn new(config: PaymentConfig, store: Option<Arc<dyn OrderStore>>) -> Self {
        let config = Arc::new(config);
        let gateway = RazorpayClient::new(config.clone());
        Self {
            config,
            gateway,
            store,
        }
    }

    pub fn from_env(store: Option<Arc<dyn OrderStore>>) -> Self {
        Self::new(PaymentConfig::from_env(), store)
    }
}
