use crate::forms::{FieldErrors, Notice};
use maud::{html, Markup};

/// Success or failure banner above a relayed form.
pub fn notice_banner(notice: Option<Notice>) -> Markup {
    html! {
        @if let Some(notice) = notice {
            div class=(notice_class(notice)) role="status" {
                strong { (notice.title) }
                p { (notice.message) }
            }
        }
    }
}

pub fn input_field(
    name: &str,
    label: &str,
    input_type: &str,
    value: &str,
    errors: &FieldErrors,
    required: bool,
) -> Markup {
    let error = errors.get(name);

    html! {
        div class="field" {
            (field_label(name, label, required))
            input
                type=(input_type)
                id=(name)
                name=(name)
                value=(value)
                aria-invalid=[error.map(|_| "true")];
            (field_error(error))
        }
    }
}

pub fn textarea_field(
    name: &str,
    label: &str,
    placeholder: &str,
    value: &str,
    errors: &FieldErrors,
    required: bool,
) -> Markup {
    let error = errors.get(name);

    html! {
        div class="field" {
            (field_label(name, label, required))
            textarea
                id=(name)
                name=(name)
                rows="4"
                placeholder=(placeholder)
                aria-invalid=[error.map(|_| "true")]
            { (value) }
            (field_error(error))
        }
    }
}

/// A select with a leading empty "prompt" option.
pub fn select_field(
    name: &str,
    label: &str,
    prompt: &str,
    options: &[(&str, &str)],
    selected: &str,
    errors: &FieldErrors,
    required: bool,
) -> Markup {
    let error = errors.get(name);

    html! {
        div class="field" {
            (field_label(name, label, required))
            select id=(name) name=(name) aria-invalid=[error.map(|_| "true")] {
                option value="" selected[selected.is_empty()] { (prompt) }
                @for (id, text) in options {
                    option value=(id) selected[selected == *id] { (text) }
                }
            }
            (field_error(error))
        }
    }
}

pub fn checkbox_field(name: &str, label: &str, checked: bool, errors: &FieldErrors) -> Markup {
    html! {
        div class="field" {
            label class="checkbox" {
                input type="checkbox" name=(name) value="on" checked[checked];
                " " (label)
            }
            (field_error(errors.get(name)))
        }
    }
}

fn notice_class(notice: Notice) -> &'static str {
    if notice.success {
        "notice notice-success"
    } else {
        "notice notice-destructive"
    }
}

fn field_label(name: &str, label: &str, required: bool) -> Markup {
    html! {
        label for=(name) {
            (label)
            @if required {
                " " span class="required" { "*" }
            }
        }
    }
}

fn field_error(error: Option<&&'static str>) -> Markup {
    html! {
        @if let Some(message) = error {
            p class="field-error" { (message) }
        }
    }
}
