// 領域層：表單／查詢模型與查詢介面

pub mod model;
pub mod ports;
