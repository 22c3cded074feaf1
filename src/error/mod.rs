mod preference;

pub use preference::PreferenceError;
pub(crate) use preference::js_message;
