use tui_textarea::Input;

use super::Screen;

#[derive(Debug)]
pub enum Event {
    KeyboardCharInput(Input),
    KeyboardCTRLC,
    KeyboardCTRLN,
    KeyboardEnter,
    KeyboardPaste(String),
    KeyboardTab,
    Navigate(Screen),
    UITick,
    UIScrollDown,
    UIScrollUp,
    UIScrollPageDown,
    UIScrollPageUp,
}
