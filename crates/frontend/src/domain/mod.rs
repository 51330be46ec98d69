pub mod a101_catering_event;
pub mod a102_shelf_life;
pub mod a103_purchase_order;
pub mod a104_supplier;
pub mod a105_price_tracker;
pub mod a106_payment_terminal;
pub mod a107_voice_command;
pub mod a108_sensor;
