//! Effect execution: the runtime hands collected `Effect`s here after each
//! event round, keeping `App::update` free of side effects.

use navetta_types::Effect;

use crate::app::App;

pub fn apply_effects(app: &mut App, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::NavigateTo(anchor) => app.navigate_to(&anchor),
            Effect::CopyToClipboardRequested(text) => copy_to_clipboard(app, text),
        }
    }
}

fn copy_to_clipboard(app: &mut App, text: String) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => app.notify("Numero copiato negli appunti"),
        Err(error) => {
            tracing::warn!("clipboard copy failed: {error}");
            app.notify("Copia non riuscita");
        }
    }
}
