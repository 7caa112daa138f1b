use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Quit,
    /// Run `service.load`() and replace the store snapshot
    Reload,
    /// Run `service.register`(...) with the current form
    SubmitSector,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{BackTab, Backspace, Char, Down, Enter, Esc, Tab, Up};

    // Global quit shortcut
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    let typing = !key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT);

    let mut action = Action::None;

    match app.screen {
        Screen::Sectors => match key.code {
            Char('q') => action = Action::Quit,
            Up | Char('k') => {
                app.sector_list_index = app.sector_list_index.saturating_sub(1);
            }
            Down | Char('j') => {
                if app.sector_list_index + 1 < app.store.sectors().len() {
                    app.sector_list_index += 1;
                }
            }
            Char('n') => {
                app.screen = Screen::Register;
                app.info_message = None;
            }
            Char('a') => {
                app.screen = Screen::Available;
                app.info_message = None;
            }
            Char('r') => action = Action::Reload,
            _ => {}
        },

        Screen::Register => match key.code {
            Tab | Down => app.form.next_field(),
            BackTab | Up => app.form.previous_field(),
            Char(character) if typing => {
                let field = app.form.focused();
                app.form.value_mut(field).push(character);
                app.form.clear_error(field);
            }
            Backspace => {
                let field = app.form.focused();
                app.form.value_mut(field).pop();
                app.form.clear_error(field);
            }
            Enter => action = Action::SubmitSector,
            Esc => app.screen = Screen::Sectors,
            _ => {}
        },

        Screen::Available => match key.code {
            Char(character) if typing => app.position_input.push(character),
            Backspace => {
                app.position_input.pop();
            }
            Enter => {
                app.apply_position_input();
            }
            Esc => app.screen = Screen::Sectors,
            _ => {}
        },
    }
    action
}
