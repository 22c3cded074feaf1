use dioxus::prelude::*;
use lazy_static::lazy_static;
use regex::Regex;

use crate::configs::{ site, Contacts };
use crate::i18n::Text;
use crate::utils::device::{ detect_compact, use_window_flag };
use crate::utils::dom::{ copy_to_clipboard, sleep_ms };
use crate::utils::{ LanguageState, Palette, ThemeState };

const TOAST_MS: u32 = 1000;

lazy_static! {
    static ref NOT_DIALABLE: Regex = Regex::new(r"[^\d+]").unwrap();
}

/// Strips everything but digits and `+` so the number can be dialled.
pub fn clean_phone(phone: &str) -> String {
    NOT_DIALABLE.replace_all(phone, "").into_owned()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    Phone,
    Email,
}

impl Contact {
    pub fn display<'a>(self, contacts: &'a Contacts) -> &'a str {
        match self {
            Contact::Phone => &contacts.phone,
            Contact::Email => &contacts.email,
        }
    }

    /// What lands on the clipboard.
    pub fn clipboard_value(self, contacts: &Contacts) -> String {
        match self {
            Contact::Phone => clean_phone(&contacts.phone),
            Contact::Email => contacts.email.clone(),
        }
    }

    fn label(self) -> Text {
        match self {
            Contact::Phone => Text::Phone,
            Contact::Email => Text::Email,
        }
    }

    fn class(self) -> &'static str {
        match self {
            Contact::Phone => "phone",
            Contact::Email => "email",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Contact::Phone => "fas fa-phone",
            Contact::Email => "fas fa-envelope",
        }
    }

    fn gradient(self) -> &'static str {
        match self {
            Contact::Phone => "linear-gradient(135deg, rgba(48, 209, 88, 0.8), rgba(52, 199, 89, 0.8))",
            Contact::Email => "linear-gradient(135deg, rgba(220, 53, 69, 0.8), rgba(248, 108, 107, 0.8))",
        }
    }
}

const TELEGRAM_GRADIENT: &str = "linear-gradient(135deg, rgba(0, 136, 204, 0.8), rgba(52, 183, 241, 0.8))";
const VK_GRADIENT: &str = "linear-gradient(135deg, rgba(76, 117, 163, 0.8), rgba(91, 136, 189, 0.8))";

#[derive(Clone, Copy, Debug, PartialEq)]
struct ButtonSize {
    size: u32,
    icon: u32,
    margin: u32,
}

fn button_size(compact: bool) -> ButtonSize {
    if compact {
        ButtonSize { size: 110, icon: 44, margin: 10 }
    } else {
        ButtonSize { size: 160, icon: 67, margin: 20 }
    }
}

fn contact_box_style(palette: &Palette) -> String {
    format!(
        "background: {}; border: 0.8px solid {}; color: {}; text-shadow: {};",
        palette.contact_bg,
        palette.accent_alpha(0.3),
        palette.accent,
        palette.accent_glow(8, 0.6)
    )
}

#[component]
fn LinkButton(href: String, kind: &'static str, icon: &'static str, gradient: &'static str, label: &'static str, compact: bool) -> Element {
    let sz = button_size(compact);
    let wrapper_style = format!("margin: {}px;", sz.margin);
    let button_style = format!("width: {0}px; height: {0}px; background: {1};", sz.size, gradient);
    let icon_style = format!("font-size: {}px;", sz.icon);

    rsx! {
        div {
            style: wrapper_style,
            a {
                href,
                target: "_blank",
                rel: "noopener noreferrer",
                class: "btn {kind}",
                style: button_style,
                i { class: icon, style: icon_style }
                span { class: "btn-label", {label} }
            }
        }
    }
}

#[component]
fn ContactButton(contact: Contact, label: &'static str, active: bool, compact: bool, onclick: EventHandler<()>) -> Element {
    let sz = button_size(compact);
    let kind = contact.class();
    let wrapper_style = if active && !compact {
        "width: 0px; height: 0px; margin: 0px; opacity: 0; transform: scale(0); pointer-events: none;".to_string()
    } else {
        format!("width: {0}px; height: {0}px; margin: {1}px; opacity: 1; transform: scale(1);", sz.size, sz.margin)
    };
    let ring = if compact && active { "0 0 0 4px rgba(255, 255, 255, 0.6), " } else { "" };
    let button_style = format!(
        "width: {0}px; height: {0}px; background: {1}; box-shadow: {2}0 10px 30px rgba(0, 0, 0, 0.4);",
        sz.size,
        contact.gradient(),
        ring
    );
    let icon_style = format!("font-size: {}px;", sz.icon);

    rsx! {
        div {
            class: "{kind}-wrapper contact-wrapper",
            style: wrapper_style,
            button {
                class: "btn {kind}",
                style: button_style,
                onclick: move |_| onclick.call(()),
                i { class: contact.icon(), style: icon_style }
                span { class: "btn-label", {label} }
            }
        }
    }
}

#[component]
pub fn SocialButtons() -> Element {
    let theme_state = use_context::<Signal<ThemeState>>();
    let language = use_context::<Signal<LanguageState>>();
    let compact = use_window_flag("resize", detect_compact);
    let mut revealed = use_signal(|| None::<Contact>);
    let mut toast = use_signal(|| false);

    let config = site();
    let copy = move |contact: Contact| {
        let value = contact.clipboard_value(&config.contacts);
        spawn(async move {
            match copy_to_clipboard(&value).await {
                Ok(()) => {
                    log::debug!("Copied {:?} to clipboard", contact);
                    toast.set(true);
                    sleep_ms(TOAST_MS).await;
                    toast.set(false);
                    if *revealed.peek() == Some(contact) {
                        revealed.set(None);
                    }
                }
                Err(e) => log::error!("Failed to copy: {}", e),
            }
        });
    };

    let palette = theme_state().theme.palette();
    let t = language();
    let compact_now = compact();
    let shown = revealed();
    let box_style = contact_box_style(palette);

    rsx! {
        div {
            class: "buttons-section",
            div {
                class: if compact_now { "buttons-container buttons-grid" } else { "buttons-container" },
                LinkButton {
                    href: config.links.telegram.clone(),
                    kind: "telegram",
                    icon: "fab fa-telegram",
                    gradient: TELEGRAM_GRADIENT,
                    label: t.t(Text::Telegram),
                    compact: compact_now,
                }
                LinkButton {
                    href: config.links.vk.clone(),
                    kind: "vk",
                    icon: "fab fa-vk",
                    gradient: VK_GRADIENT,
                    label: t.t(Text::Vk),
                    compact: compact_now,
                }
                for contact in [Contact::Phone, Contact::Email] {
                    ContactButton {
                        key: "{contact:?}",
                        contact,
                        label: t.t(contact.label()),
                        active: shown == Some(contact),
                        compact: compact_now,
                        onclick: move |_| revealed.set(Some(contact)),
                    }
                }
            }

            for contact in [Contact::Phone, Contact::Email] {
                div {
                    key: "{contact:?}-info",
                    class: if shown == Some(contact) { "contact-info contact-info-open" } else { "contact-info" },
                    div {
                        class: "contact-box",
                        style: box_style.clone(),
                        onclick: move |_| copy(contact),
                        i { class: "fas fa-copy" }
                        span {
                            class: if compact_now { "contact-value contact-value-compact" } else { "contact-value" },
                            {contact.display(&config.contacts)}
                        }
                    }
                }
            }

            div {
                class: if toast() { "copy-toast copy-toast-visible" } else { "copy-toast" },
                style: box_style.clone(),
                {t.t(Text::CopiedHint)}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_phone_keeps_digits_and_plus() {
        assert_eq!(clean_phone("+7 910 876 76 75"), "+79108767675");
        assert_eq!(clean_phone("(495) 123-45-67"), "4951234567");
        assert_eq!(clean_phone(""), "");
    }

    #[test]
    fn test_clipboard_values() {
        let contacts = &site().contacts;
        assert_eq!(Contact::Phone.clipboard_value(contacts), "+79108767675");
        assert_eq!(Contact::Email.clipboard_value(contacts), "kirsanoff.egor2017@yandex.ru");
        assert_eq!(Contact::Phone.display(contacts), "+7 910 876 76 75");
    }

    #[test]
    fn test_compact_buttons_are_smaller() {
        assert_eq!(button_size(true).size, 110);
        assert_eq!(button_size(false).size, 160);
    }

    #[test]
    fn test_contact_box_uses_theme_accent() {
        let style = contact_box_style(crate::utils::Theme::Underwater.palette());
        assert!(style.starts_with("background: rgba(0, 60, 60, 0.6);"));
        assert!(style.contains("color: #7fb5b5;"));
    }
}
