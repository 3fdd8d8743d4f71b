use crate::app::App;
use crate::domain::filters::{SearchFilters, ALL};
use crate::domain::lead::{LeadCapture, LeadForm};
use crate::domain::search::{run_search, SearchState};
use crate::errors::ServerError;
use crate::forms::careers::CareerApplication;
use crate::forms::off_market::OffMarketForm;
use crate::forms::prayer::PrayerRequest;
use crate::forms::{self, FieldErrors, Notice, RelayForm};
use crate::params::Params;
use crate::responses::{html_response, html_response_with_trigger, svg_response, ResultResp};
use crate::templates::components::{
    city_select, lead_capture_body, lead_form, listings_grid, PLACEHOLDER_SVG,
};
use crate::templates::pages::{self, PropertiesVm};
use astra::Request;
use maud::Markup;

/// htmx event that closes the save-search dialog.
const CLOSE_LEAD_DIALOG: &str = "closeLeadDialog";

const KNOWN_PATHS: &[&str] = &[
    "/",
    "/properties",
    "/properties/listings",
    "/properties/cities",
    "/properties/save-search",
    "/properties/save-search/reset",
    "/off-market",
    "/careers",
    "/faith-community",
    "/placeholder.svg",
];

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    log::info!("{method} {path}");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page()),

        // Property search
        ("GET", "/properties") => properties_page(&req, app),
        ("GET", "/properties/listings") => listings(&req, app),
        ("GET", "/properties/cities") => cities(&req),

        // Save-search lead capture
        ("GET", "/properties/save-search") => fresh_lead_form(&req),
        ("GET", "/properties/save-search/reset") => reset_lead_form(&req),
        ("POST", "/properties/save-search") => save_search(&mut req, app),

        // Relayed forms
        ("GET", "/off-market") => blank_form::<OffMarketForm>(pages::off_market_page),
        ("POST", "/off-market") => {
            relay_form::<OffMarketForm>(&mut req, app, pages::off_market_form, pages::off_market_page)
        }
        ("GET", "/careers") => blank_form::<CareerApplication>(pages::careers_page),
        ("POST", "/careers") => {
            relay_form::<CareerApplication>(&mut req, app, pages::careers_form, pages::careers_page)
        }
        ("GET", "/faith-community") => blank_form::<PrayerRequest>(pages::faith_community_page),
        ("POST", "/faith-community") => relay_form::<PrayerRequest>(
            &mut req,
            app,
            pages::prayer_form,
            pages::faith_community_page,
        ),

        ("GET", "/placeholder.svg") => svg_response(PLACEHOLDER_SVG),

        (_, p) if KNOWN_PATHS.contains(&p) => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

/// Requests issued by htmx get fragments; plain form posts get whole pages.
fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}

/// Full search page. A `search` param (the no-JS form submit) runs the search
/// up front so results render inline.
fn properties_page(req: &Request, app: &App) -> ResultResp {
    let params = Params::from_query(req);
    let filters = params.filters();

    let mut search = SearchState::new();
    if params.get("search").is_some() {
        run_search(&mut search, app.listings.as_ref(), &filters);
    }

    html_response(pages::properties_page(&PropertiesVm {
        filters: &filters,
        search: &search,
        capture: &LeadCapture::open(),
        show_dialog: false,
    }))
}

fn listings(req: &Request, app: &App) -> ResultResp {
    let filters = Params::from_query(req).filters();

    let mut search = SearchState::new();
    run_search(&mut search, app.listings.as_ref(), &filters);

    html_response(listings_grid(&search.view()))
}

/// City selector for the newly chosen county, with the city reset.
fn cities(req: &Request) -> ResultResp {
    let params = Params::from_query(req);

    let mut filters = SearchFilters::default();
    filters.set_county(params.get("county").unwrap_or(ALL));

    html_response(city_select(filters.county.as_deref(), filters.city.as_deref()))
}

fn fresh_lead_form(req: &Request) -> ResultResp {
    let filters = Params::from_query(req).filters();
    html_response(lead_form(&LeadCapture::open(), &filters))
}

/// Loaded by the success panel once the grace period is over.
fn reset_lead_form(req: &Request) -> ResultResp {
    let filters = Params::from_query(req).filters();

    let mut capture = LeadCapture::open();
    capture.close_after_success();

    html_response_with_trigger(lead_form(&capture, &filters), CLOSE_LEAD_DIALOG)
}

fn save_search(req: &mut Request, app: &App) -> ResultResp {
    let params = Params::from_body(req)?;
    let criteria = params.filters();

    let mut capture = LeadCapture::with_form(LeadForm {
        full_name: params.text("full_name"),
        phone_number: params.text("phone_number"),
        email: params.text("email"),
    });
    capture.submit(app.leads.as_ref(), &criteria);

    if is_htmx(req) {
        return html_response(lead_capture_body(&capture, &criteria));
    }

    html_response(pages::properties_page(&PropertiesVm {
        filters: &criteria,
        search: &SearchState::new(),
        capture: &capture,
        show_dialog: true,
    }))
}

/// Renders a relayed form (or the page around it) with errors and a notice.
type FormView<F> = fn(&F, &FieldErrors, Option<Notice>) -> Markup;

fn blank_form<F: RelayForm>(page: FormView<F>) -> ResultResp {
    html_response(page(&F::default(), &FieldErrors::new(), None))
}

/// Validate a posted form and relay it when clean. htmx swaps just the form;
/// a plain post gets the whole page back.
fn relay_form<F: RelayForm>(
    req: &mut Request,
    app: &App,
    fragment: FormView<F>,
    page: FormView<F>,
) -> ResultResp {
    let params = Params::from_body(req)?;
    let form = F::from_pairs(params.pairs());

    let errors = form.validate();
    let (form, notice) = if errors.is_empty() {
        let (form, notice) = forms::submit(form, app.forms.as_ref());
        (form, Some(notice))
    } else {
        (form, None)
    };

    let render = if is_htmx(req) { fragment } else { page };
    html_response(render(&form, &errors, notice))
}
