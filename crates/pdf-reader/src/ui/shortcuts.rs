use crate::viewer::command::ViewerCommand;
use eframe::egui;

/// Removes the first press of `key` with Ctrl and no other modifier.
///
/// `InputState::consume_key` ignores extra Shift and Alt, so Ctrl+Alt+= would
/// match too.
fn consume_ctrl_key(input: &mut egui::InputState, key: egui::Key) -> bool {
    let mut found = false;
    input.events.retain(|event| {
        let is_match = !found
            && matches!(
                event,
                egui::Event::Key {
                    key: pressed_key,
                    modifiers,
                    pressed: true,
                    ..
                } if *pressed_key == key && modifiers.matches_exact(egui::Modifiers::CTRL)
            );
        found |= is_match;
        !is_match
    });
    found
}

/// Ctrl+= zooms in, Ctrl+- zooms out.
pub fn zoom_command(input: &mut egui::InputState) -> Option<ViewerCommand> {
    if consume_ctrl_key(input, egui::Key::Equals) || consume_ctrl_key(input, egui::Key::Plus) {
        return Some(ViewerCommand::ZoomIn);
    }
    if consume_ctrl_key(input, egui::Key::Minus) {
        return Some(ViewerCommand::ZoomOut);
    }
    None
}

pub fn read_shortcuts(ctx: &egui::Context) -> Option<ViewerCommand> {
    ctx.input_mut(zoom_command)
}
