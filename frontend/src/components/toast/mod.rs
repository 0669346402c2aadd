use std::borrow::Cow;
use std::collections::{HashSet, VecDeque};
use std::fmt::Display;

use dioxus::prelude::*;
use gloo::timers::future::TimeoutFuture;
use itertools::Itertools;
use strum::AsRefStr;

#[derive(Debug, Clone, Copy, AsRefStr, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Level {
    Error,
    Success,
    Info,
}

impl Level {
    fn alert_class(self) -> &'static str {
        match self {
            Self::Error => "alert alert-error",
            Self::Success => "alert alert-success",
            Self::Info => "alert alert-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: Level,
    pub message: Cow<'static, str>,
}

/// Notifications currently on screen, oldest first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoticeQueue {
    next_id: u64,
    notices: VecDeque<Notice>,
}

impl NoticeQueue {
    pub const VISIBLE: usize = 3;

    pub fn push<M: Into<Cow<'static, str>>>(&mut self, level: Level, message: M) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push_back(Notice { id, level, message: message.into() });
        while self.notices.len() > Self::VISIBLE {
            self.notices.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        before != self.notices.len()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter().filter(|notice| notice.level == Level::Error)
    }

    pub fn transient(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter().filter(|notice| notice.level != Level::Error)
    }
}

static NOTICES: GlobalSignal<NoticeQueue> = Signal::global(NoticeQueue::default);

pub fn notify<M: Into<Cow<'static, str>>>(level: Level, message: M) -> u64 {
    let message = message.into();
    match level {
        Level::Error => tracing::error!(%message, "notify"),
        _ => tracing::debug!(level = level.as_ref(), %message, "notify"),
    }
    NOTICES.write().push(level, message)
}

fn dismiss(id: u64) {
    NOTICES.write().dismiss(id);
}

pub trait Toast {
    type Out;

    fn toast(self) -> Option<Self::Out>;
}

impl<T, E: Display> Toast for Result<T, E> {
    type Out = T;

    fn toast(self) -> Option<Self::Out> {
        match self {
            Ok(t) => Some(t),
            Err(e) => {
                notify(Level::Error, e.to_string());
                None
            }
        }
    }
}

/// Error notifications, kept until clicked.
#[component]
pub fn Toaster() -> Element {
    let errors = NOTICES.read().errors().cloned().collect_vec();

    rsx! {
        div { class: "toast toast-top toast-end z-50",
            for notice in errors {
                div {
                    key: "{notice.id}",
                    class: notice.level.alert_class(),
                    onclick: move |_| dismiss(notice.id),
                    span { "{notice.message}" }
                }
            }
        }
    }
}

/// Success and info notifications, dismissed after `duration_ms`.
#[component]
pub fn Sonner(duration_ms: u32) -> Element {
    let mut scheduled = use_signal(HashSet::<u64>::new);
    let transient = NOTICES.read().transient().cloned().collect_vec();

    use_effect(move || {
        let ids = NOTICES.read().transient().map(|notice| notice.id).collect_vec();
        let mut scheduled = scheduled.write();
        scheduled.retain(|id| ids.contains(id));
        for id in ids {
            if scheduled.insert(id) {
                spawn(async move {
                    TimeoutFuture::new(duration_ms).await;
                    dismiss(id);
                });
            }
        }
    });

    rsx! {
        div { class: "toast toast-bottom toast-center z-50",
            for notice in transient {
                div { key: "{notice.id}", class: notice.level.alert_class(),
                    span { "{notice.message}" }
                }
            }
        }
    }
}
