//! Headless demo: build a booking page, bootstrap the widgets, and script
//! the interactions a user would perform, printing what a form handler
//! would receive.

use dom::build::{self, attr_pair};
use dom::{Node, query};
use mimalloc::MiMalloc;
use widgets::{Key, Page, PageAction, UiEvent, WidgetRegistry};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn booking_page() -> Page {
    let root = Node::Document {
        id: dom::Id(0),
        doctype: None,
        children: vec![build::element_with_children(
            "body",
            vec![attr_pair("class", "home-page")],
            vec![build::element_with_children(
                "form",
                vec![attr_pair("method", "post"), attr_pair("action", "/bookings/")],
                vec![
                    build::element(
                        "div",
                        vec![
                            attr_pair("class", "phone-input"),
                            attr_pair("id", "booking_phone"),
                        ],
                    ),
                    build::element(
                        "div",
                        vec![
                            attr_pair("class", "simple-phone-input"),
                            attr_pair("id", "contact_phone"),
                        ],
                    ),
                    build::element(
                        "input",
                        vec![attr_pair("type", "password"), attr_pair("id", "account_pw")],
                    ),
                ],
            )],
        )],
    };
    Page::new(root)
}

fn field_id(page: &Page, html_id: &str) -> dom::Id {
    query::find_by_html_id(&page.dom, html_id)
        .map(Node::id)
        .unwrap_or_else(|| panic!("demo page is missing {html_id:?}"))
}

fn main() {
    let mut page = booking_page();
    let mut registry = WidgetRegistry::bootstrap(&mut page);

    // -- Country-aware phone: junk in, digits out.
    let number = field_id(&page, "booking_phone_number");
    registry.dispatch(
        &mut page,
        &UiEvent::Input {
            target: number,
            text: "912-345-67-89 (mobile)".to_string(),
        },
    );
    registry.dispatch(&mut page, &UiEvent::Blur { target: number });
    println!(
        "booking phone -> {:?} (field shows {:?})",
        registry.phone_value(&page, "booking_phone"),
        page.node(number).and_then(|n| query::attr(n, "value")).unwrap_or(""),
    );

    let select = field_id(&page, "booking_phone_country");
    registry.dispatch(
        &mut page,
        &UiEvent::Change {
            target: select,
            value: "+380".to_string(),
        },
    );
    println!(
        "after switching to +380 -> {:?}",
        registry.phone_value(&page, "booking_phone")
    );

    // -- Freeform phone: separators survive, stray keys do not.
    let contact = field_id(&page, "contact_phone_number");
    let rejected = registry.dispatch(
        &mut page,
        &UiEvent::KeyPress {
            target: contact,
            key: Key::Char('q'),
        },
    );
    println!("pressing 'q' in the freeform field -> {rejected:?}");
    registry.dispatch(
        &mut page,
        &UiEvent::Input {
            target: contact,
            text: "+7 (912) 345-67".to_string(),
        },
    );
    println!(
        "contact phone -> {:?}",
        registry.simple_phone_value(&page, "contact_phone")
    );

    // -- Password toggle: two clicks, back where we started.
    let toggle_button = {
        let form = query::find_element_named(&page.dom, "form").expect("demo page has a form");
        form.children()
            .and_then(|kids| {
                kids.iter()
                    .find(|n| query::has_class(n, "password-toggle-container"))
            })
            .and_then(|wrapper| wrapper.children().map(|kids| kids[1].id()))
            .expect("password toggle was attached")
    };
    let pw = field_id(&page, "account_pw");
    for _ in 0..2 {
        registry.dispatch(
            &mut page,
            &UiEvent::Click {
                target: toggle_button,
            },
        );
        println!(
            "password field type -> {:?}",
            page.node(pw).and_then(|n| query::attr(n, "type")).unwrap_or("")
        );
    }

    // -- Back to top: scroll down, click, glide home over simulated frames.
    let mut offset = 1200.0;
    registry.dispatch(&mut page, &UiEvent::Scroll { offset });
    println!(
        "scrolled to {offset}; button visible: {}",
        registry.back_to_top().map(|w| w.is_visible()).unwrap_or(false)
    );

    let top_button = {
        let body = query::find_element_named(&page.dom, "body").expect("demo page has a body");
        body.children()
            .and_then(|kids| {
                kids.iter().find(|n| query::has_class(n, "back-to-top-btn"))
            })
            .map(Node::id)
            .expect("back-to-top was attached")
    };
    registry.dispatch(&mut page, &UiEvent::Click { target: top_button });

    let mut now_ms = 0.0;
    while registry.back_to_top().is_some_and(|w| w.is_animating()) {
        if let Some(PageAction::ScrollTo(next)) =
            registry.dispatch(&mut page, &UiEvent::Frame { now_ms })
        {
            offset = next;
            registry.dispatch(&mut page, &UiEvent::Scroll { offset });
        }
        now_ms += 16.0;
    }
    println!(
        "after the glide: offset {offset}; button visible: {}",
        registry.back_to_top().map(|w| w.is_visible()).unwrap_or(false)
    );
}
