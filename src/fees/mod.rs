//! Fee calculations: gateway commission and event fee resolution.

pub mod commission;
pub mod event_fee;

pub use commission::{
    calculate_bulk_commission, calculate_commission, calculate_net_revenue, Chargeable,
    CommissionCalculator, DEFAULT_COMMISSION_RATE,
};
pub use event_fee::{
    get_event_fee_info, EventFeeResolver, DEFAULT_CURRENCY_SYMBOL, DEFAULT_FREE_LABEL,
};
