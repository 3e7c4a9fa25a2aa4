//! Presentation
//!
//! Pure functions from [`FormState`] and [`PortalConfig`] to markup. The
//! wasm binding and the static host both render through here, so the
//! server-rendered first paint and the client re-renders are identical.

use maud::{html, Markup};

use crate::config::PortalConfig;
use crate::form::{DobField, FormField, FormState};
use crate::options::{day_options, month_options, year_options, SelectOption};

/// `id` of the login `<form>`
pub const FORM_ID: &str = "login-form";

pub const SUBMIT_LABEL: &str = "दाखिल करना / Sign In";
pub const SUBMITTING_LABEL: &str = "Processing...";

/// Everything inside the application root element
pub fn render_app(state: &FormState, config: &PortalConfig) -> Markup {
    html! {
        div class="bg-gray-100 min-h-screen" {
            div class="container mx-auto p-4" {
                (header(config))
                (banner(config))
                div class="flex flex-col lg:flex-row gap-8" {
                    (services_card(config))
                    (login_panel(state, config))
                }
            }
        }
    }
}

fn header(config: &PortalConfig) -> Markup {
    html! {
        div class="flex flex-col md:flex-row justify-between items-center mb-8" {
            div class="flex items-center mb-4 md:mb-0" {
                img alt="Uttar Pradesh Police Logo" class="w-16 h-16 mr-4" src=(config.logo_src);
                div {
                    h1 class="text-red-600 text-xl font-bold" {
                        "उत्तर प्रदेश पुलिस भर्ती एवं प्रोन्नति बोर्ड"
                    }
                    h2 class="text-red-600 text-lg" {
                        "Uttar Pradesh Police Recruitment & Promotion Board"
                    }
                }
            }
            div {
                a class="text-red-600 text-lg flex flex-col items-center hover:text-red-700" href="#" aria-label="Home" {
                    span class="text-2xl" aria-hidden="true" { "⌂" }
                    span class="hidden md:inline" { "Home" }
                }
            }
        }
    }
}

fn banner(config: &PortalConfig) -> Markup {
    html! {
        div class="relative mb-8 rounded-lg overflow-hidden" {
            img alt="Police Officers in Uniform" class="w-full h-64 object-cover" src=(config.banner_src);
            div class="absolute inset-0 bg-black bg-opacity-30 flex items-center justify-center" {
                div class="text-center space-y-2" {
                    @for line in ["Direct Recruitment", "for the Post of Constable", "(Civil Police) - 2023"] {
                        h3 class="text-white text-2xl md:text-3xl font-bold" { (line) }
                    }
                }
            }
        }
    }
}

/// Candidate services and help desk. The service buttons have no handlers.
fn services_card(config: &PortalConfig) -> Markup {
    let help = &config.help_desk;
    html! {
        div class="w-full lg:w-1/3 bg-white rounded-xl shadow-lg p-6" {
            div class="mb-6" {
                h3 class="text-xl font-bold text-gray-700 mb-4 flex items-center" {
                    span class="mr-2" aria-hidden="true" { "☰" }
                    "Candidate Services"
                }
                div class="space-y-4" {
                    button type="button" class="w-full bg-orange-600 hover:bg-orange-700 text-white py-3 px-6 rounded-lg transition-all flex items-center justify-center" {
                        span class="mr-2" aria-hidden="true" { "⬇" }
                        "Download Admit Card"
                    }
                    button type="button" class="w-full bg-blue-600 hover:bg-blue-700 text-white py-3 px-6 rounded-lg transition-all" {
                        "Application Status"
                    }
                    button type="button" class="w-full bg-purple-600 hover:bg-purple-700 text-white py-3 px-6 rounded-lg transition-all" {
                        "New Registration"
                    }
                }
            }
            div class="border-t pt-4" {
                h3 class="text-xl font-bold text-gray-700 mb-4 flex items-center" {
                    span class="mr-2" aria-hidden="true" { "☎" }
                    "Help Desk"
                }
                div class="space-y-2 text-gray-600" {
                    p { "Email: " (help.email) }
                    p { "Phone: " (help.phone) }
                    p { "Office Hours: " (help.office_hours) }
                }
            }
        }
    }
}

fn login_panel(state: &FormState, config: &PortalConfig) -> Markup {
    html! {
        div class="flex-1 bg-white rounded-xl shadow-lg p-6" {
            h4 class="bg-orange-600 text-white text-center py-3 rounded-t-xl text-xl font-semibold mb-6" {
                "अभ्यर्थी लॉग इन / Candidate Login"
            }
            (render_form(state, config))
        }
    }
}

/// The login form on its own.
///
/// `onsubmit` blocks the native submission until the wasm bundle has
/// mounted; the mounted submit listener does the real work. With scripts
/// off the `post` method keeps the candidate's details out of the URL.
pub fn render_form(state: &FormState, config: &PortalConfig) -> Markup {
    let dob = &state.date_of_birth;
    html! {
        form id=(FORM_ID) class="space-y-6" method="post" onsubmit="return false" {
            @if state.has_error() {
                div class="bg-red-100 text-red-700 p-3 rounded-lg" role="alert" {
                    (state.error_message)
                }
            }

            div {
                label class="block text-gray-700 mb-2 font-medium" {
                    "पंजीकरण संख्या / Registration Number"
                }
                input
                    class="w-full border border-gray-300 p-3 rounded-lg focus:ring-2 focus:ring-orange-500 focus:border-transparent"
                    name=(FormField::RegistrationNumber.input_name())
                    placeholder="Enter Registration Number"
                    value=(state.registration_number);
            }

            div {
                label class="block text-gray-700 mb-2 font-medium" {
                    "जन्म तिथि / Date of Birth"
                }
                div class="grid grid-cols-3 gap-4" {
                    (dob_select(DobField::Day, "Day", &day_options(), &dob.day))
                    (dob_select(DobField::Month, "Month", &month_options(), &dob.month))
                    (dob_select(
                        DobField::Year,
                        "Year",
                        &year_options(config.reference_year, config.year_count),
                        &dob.year,
                    ))
                }
            }

            div class="space-y-4" {
                button
                    type="submit"
                    disabled[state.is_submitting]
                    class="w-full bg-green-600 hover:bg-green-700 text-white py-3 px-6 rounded-lg transition-all disabled:opacity-50" {
                    @if state.is_submitting { (SUBMITTING_LABEL) } @else { (SUBMIT_LABEL) }
                }
                button type="button" class="w-full bg-red-600 hover:bg-red-700 text-white py-3 px-6 rounded-lg transition-all" {
                    "पंजीकरण संख्या भूल गए / Forgot Registration Number"
                }
            }
        }
    }
}

fn dob_select(field: DobField, placeholder: &str, options: &[SelectOption], current: &str) -> Markup {
    html! {
        select class="border border-gray-300 p-3 rounded-lg" name=(FormField::Dob(field).input_name()) {
            option value="" selected[current.is_empty()] { (placeholder) }
            @for opt in options {
                option value=(opt.value) selected[opt.value == current] { (opt.label) }
            }
        }
    }
}
