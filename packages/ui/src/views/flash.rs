use dioxus::core::Task;
use dioxus::prelude::*;

use crate::app::{sleep, use_app};
use crate::state::{Flash, FLASH_DURATION};

#[component]
pub fn FlashView(flash: Option<Flash>) -> Element {
    let Some(flash) = flash else {
        return rsx! {};
    };
    rsx! {
        div {
            key: "{flash.id}",
            class: "{flash.kind.class()}",
            role: "status",
            "{flash.message}"
        }
    }
}

/// Shows the current flash and expires it after [`FLASH_DURATION`].
///
/// Showing a newer flash cancels the pending timer; the timer itself only
/// clears the flash it was started for.
#[component]
pub fn FlashBanner() -> Element {
    let mut app = use_app();
    let flash_id = use_memo(move || app.read().flash.current_id());
    let mut timer = use_signal(|| Option::<Task>::None);

    use_effect(move || {
        let id = flash_id();
        if let Some(previous) = timer.write().take() {
            previous.cancel();
        }
        if let Some(id) = id {
            let task = spawn(async move {
                sleep(FLASH_DURATION).await;
                app.write().flash.expire(id);
            });
            timer.set(Some(task));
        }
    });

    rsx! {
        FlashView { flash: app.read().flash.current().cloned() }
    }
}
