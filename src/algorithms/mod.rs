pub mod maxvalueage;
pub mod minindex;
pub mod minnumber;
pub mod minpriority;
