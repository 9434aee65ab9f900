/// Data pool operations
pub mod data_pool;
/// Flow run, payload and scheduled flow operations
pub mod flow;
/// Script and script version operations
pub mod script;

pub use self::data_pool::DataPoolService;
pub use self::flow::FlowService;
pub use self::script::ScriptService;
