pub mod aggregate;

pub use aggregate::{decode_bill_list, BillDto, BillRecord, BillStatus};
