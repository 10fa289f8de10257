pub mod cred_def;
pub mod rev_reg_def;
pub mod rev_reg_delta;
pub mod rev_status_list;
pub mod schema;
