use dioxus::prelude::*;

use crate::vm::ScoreboardVm;

#[component]
pub fn Scoreboard(scoreboard: ScoreboardVm, on_restart: EventHandler<()>) -> Element {
    rsx! {
        div { id: "scoreboard", class: "scoreboard",
            h2 { "Quiz complete" }
            p { id: "final-score", "{scoreboard.message}" }
            button {
                id: "restart-btn",
                class: "restart-btn",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Play Again"
            }
        }
    }
}
