mod scripted_picker;

pub use scripted_picker::ScriptedPicker;
