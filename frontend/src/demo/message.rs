use log::{info, warn};

use crate::config;
use crate::demo::validator::FormInput;

/// Where demo requests go and what they look like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSettings {
    pub address: &'static str,
    pub subject: &'static str,
    pub product_name: &'static str,
    pub auto_close_ms: u32,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            address: config::demo_contact_address(),
            subject: config::demo_subject(),
            product_name: config::PRODUCT_NAME,
            auto_close_ms: config::DEMO_AUTO_CLOSE_MS,
        }
    }
}

/// Hands a compose URI to the visitor's own mail client. Nothing comes back.
pub trait MailComposer {
    fn compose(&mut self, uri: &str);
}

/// Navigates the current window to the `mailto:` URI.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserMailComposer;

impl MailComposer for BrowserMailComposer {
    fn compose(&mut self, uri: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.location().set_href(uri) {
                    warn!("Mail client hand-off was rejected: {:?}", e);
                } else {
                    info!("Handed demo request to mail client");
                }
            }
            None => warn!("No window available for mail hand-off"),
        }
    }
}

pub fn compose_body(input: &FormInput, product_name: &str) -> String {
    let mut lines = vec![
        "Hi,".to_string(),
        String::new(),
        format!("I would like to schedule a demo of {}.", product_name),
        String::new(),
        format!("Name: {}", input.name),
        format!("Email: {}", input.email),
        format!("Practice name: {}", input.practice_name),
        format!("Role (PCP/Specialist): {}", input.role),
        "Best time to connect:".to_string(),
    ];
    if input.has_message() {
        lines.push(format!("Message: {}", input.message));
    }
    lines.push(String::new());
    lines.push("Thanks".to_string());
    lines.join("\n")
}

pub fn compose_uri(input: &FormInput, settings: &ContactSettings) -> String {
    let body = compose_body(input, settings.product_name);
    format!(
        "mailto:{}?subject={}&body={}",
        settings.address,
        urlencoding::encode(settings.subject),
        urlencoding::encode(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ContactSettings {
        ContactSettings {
            address: "demo@example.com",
            subject: "Demo request",
            product_name: "Tether",
            auto_close_ms: 3000,
        }
    }

    fn input(message: &str) -> FormInput {
        FormInput {
            name: "Jane Doe".to_string(),
            email: "jane@clinic.com".to_string(),
            practice_name: "Clinic & Co".to_string(),
            role: "Practice Administrator".to_string(),
            message: message.to_string(),
        }
    }

    fn decoded_body(uri: &str) -> String {
        let encoded = uri.split("&body=").nth(1).expect("body parameter");
        urlencoding::decode(encoded).expect("valid utf-8").into_owned()
    }

    #[test]
    fn body_without_message_omits_the_line() {
        let body = compose_body(&input(""), "Tether");
        assert_eq!(
            body,
            "Hi,\n\nI would like to schedule a demo of Tether.\n\n\
             Name: Jane Doe\nEmail: jane@clinic.com\nPractice name: Clinic & Co\n\
             Role (PCP/Specialist): Practice Administrator\nBest time to connect:\n\nThanks"
        );
    }

    #[test]
    fn blank_message_counts_as_empty() {
        assert!(!compose_body(&input("   "), "Tether").contains("Message:"));
    }

    #[test]
    fn uri_has_recipient_subject_and_body() {
        let uri = compose_uri(&input("Mornings"), &settings());
        assert!(uri.starts_with("mailto:demo@example.com?subject=Demo%20request&body="));
        assert!(!uri.contains(' '));
        assert!(!uri.contains('\n'));
    }

    #[test]
    fn decoded_body_contains_the_submitted_values() {
        let uri = compose_uri(&input("Tuesdays after 3pm? 50% sure & ok"), &settings());
        let body = decoded_body(&uri);
        assert!(body.contains("Jane Doe"));
        assert!(body.contains("jane@clinic.com"));
        assert!(body.contains("Clinic & Co"));
        assert!(body.contains("Practice Administrator"));
        assert!(body.contains("Message: Tuesdays after 3pm? 50% sure & ok"));
    }

    #[test]
    fn decoded_body_without_message_has_no_message_line() {
        let body = decoded_body(&compose_uri(&input(""), &settings()));
        assert!(body.contains("Role (PCP/Specialist): Practice Administrator"));
        assert!(!body.contains("Message:"));
    }

    #[test]
    fn special_characters_are_percent_encoded() {
        let uri = compose_uri(&input("a&b=c"), &settings());
        let body = uri.split("&body=").nth(1).expect("body parameter");
        assert!(body.contains("a%26b%3Dc"));
        assert!(body.contains("Clinic%20%26%20Co"));
    }
}
