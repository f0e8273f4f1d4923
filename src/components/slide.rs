//! `<Slide>`: one named variant inside a `<Deck>`.
//!
//! A slide attaches itself to the nearest deck while rendering and derives
//! everything it shows from the deck's reactive mirror of the registry.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::components::deck::DeckContext;
use crate::state::config::{Confidence, SlideConfig};
use crate::state::deck::DeckController;
use crate::state::slide::{SlideData, SlideStatus};
use crate::state::slides::SlideKey;

/// Public handle to a mounted slide.
#[derive(Clone, Debug)]
pub struct SlideHandle {
    controller: DeckController,
    key: SlideKey,
}

impl SlideHandle {
    #[must_use]
    pub fn key(&self) -> SlideKey {
        self.key
    }

    #[must_use]
    pub fn is_active_slide(&self) -> bool {
        self.controller.is_slide_active(self.key)
    }

    #[must_use]
    pub fn slide_data(&self) -> Option<SlideData> {
        self.controller.slide_data(self.key)
    }

    /// Make this slide the deck's active slide.
    pub fn activate(&self) -> bool {
        self.controller.activate_slide(self.key)
    }
}

#[component]
pub fn Slide(
    #[prop(into)] label: Signal<String>,
    /// Explicit id; derived from the deck id and label when absent.
    #[prop(optional, into)]
    id: Option<String>,
    #[prop(optional, into)] ai_prompt: MaybeProp<String>,
    /// Markdown notes shown in the toolbar panel.
    #[prop(optional, into)]
    notes: MaybeProp<String>,
    /// Model confidence in `0.0..=1.0`; clamped, NaN ignored.
    #[prop(optional, into)]
    confidence: MaybeProp<f64>,
    #[prop(optional)] on_ready: Option<Callback<SlideHandle>>,
    children: ChildrenFn,
) -> impl IntoView {
    let Some(ctx) = use_context::<DeckContext>() else {
        warn!("<Slide label={:?}> rendered outside a <Deck>; showing its content as-is", label.get_untracked());
        return children().into_any();
    };

    let read_config = move || SlideConfig {
        id: id.clone(),
        label: label.get(),
        ai_prompt: ai_prompt.get(),
        notes: notes.get(),
        confidence: confidence.get().and_then(Confidence::new),
    };

    let controller = ctx.controller.clone();
    let key = controller.attach_slide(untrack(read_config.clone()));
    ctx.request_rescan();

    // Prop changes re-sync the slide and trigger a discovery pass.
    {
        let controller = controller.clone();
        let ctx = ctx.clone();
        Effect::new(move |_| {
            if controller.update_slide(key, read_config()) {
                ctx.request_rescan();
            }
        });
    }

    let DeckContext { epoch, active, .. } = ctx;
    let owner = controller.deck_id().unwrap_or_default().to_owned();

    let status = {
        let controller = controller.clone();
        Memo::new(move |_| {
            epoch.track();
            controller.slide_status(key, active.get().as_deref())
        })
    };
    let presentation = {
        let controller = controller.clone();
        Memo::new(move |_| controller.presentation(status.get()))
    };

    let slide_id = {
        let controller = controller.clone();
        move || {
            epoch.track();
            controller.slide_id(key)
        }
    };

    let on_click = {
        let controller = controller.clone();
        move |_| {
            if presentation.get_untracked().click_activates(status.get_untracked()) {
                controller.activate_slide(key);
            }
        }
    };

    if let Some(on_ready) = on_ready {
        on_ready.run(SlideHandle { controller: controller.clone(), key });
    }

    on_cleanup(move || {
        controller.detach_slide(key);
        ctx.request_rescan();
    });

    view! {
        <div
            class="variant-slide"
            data-slide-owner=owner
            data-slide-key=key.to_string()
            data-slide-id=slide_id
            data-active=move || (status.get() == SlideStatus::Active).to_string()
            role="group"
            aria-label=move || label.get()
            aria-hidden=move || (!presentation.get().visible).to_string()
            style=move || presentation.get().style()
            on:click=on_click
        >
            <Show when=move || presentation.get().rendered>{children()}</Show>
        </div>
    }
    .into_any()
}
