use trip_distance_shared::trips::{LookupStatus, TravelMode, TripRequest, TripResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlInputElement, Request, RequestInit, RequestMode, Response};
use yew::prelude::*;

const BACKEND_URL: &str = "http://localhost:5001/";

/// Editable form state. Updates go through `set` keyed by the input's wire
/// name so unrelated fields keep their values.
#[derive(Clone, Debug, PartialEq, Eq)]
struct FormData {
    start_input: String,
    destination_input: String,
    travel_mode: String,
}

impl FormData {
    /// Fresh form: empty inputs with driving preselected.
    fn initial() -> FormData {
        FormData {
            start_input: String::new(),
            destination_input: String::new(),
            travel_mode: TravelMode::Driving.as_str().to_string(),
        }
    }

    /// Post-submit form: everything empty, including the mode.
    fn cleared() -> FormData {
        FormData {
            start_input: String::new(),
            destination_input: String::new(),
            travel_mode: String::new(),
        }
    }

    fn set(&self, name: &str, value: String) -> FormData {
        let mut next = self.clone();
        match name {
            "startInput" => next.start_input = value,
            "destinationInput" => next.destination_input = value,
            "travelMode" => next.travel_mode = value,
            other => log::warn!("Ignoring update for unknown form field {}", other),
        }
        next
    }

    fn to_request(&self) -> TripRequest {
        TripRequest {
            start_input: self.start_input.clone(),
            destination_input: self.destination_input.clone(),
            travel_mode: self.travel_mode.clone(),
        }
    }
}

/// Display state, holding only the extracted `.text` sub-fields.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ResultData {
    status: LookupStatus,
    distance_text: String,
    duration_text: String,
}

impl Default for ResultData {
    fn default() -> ResultData {
        ResultData {
            status: LookupStatus::Ok,
            distance_text: String::new(),
            duration_text: String::new(),
        }
    }
}

impl ResultData {
    fn from_trip_result(result: &TripResult) -> ResultData {
        ResultData {
            status: result.status,
            distance_text: result.distance_result.text().unwrap_or_default().to_string(),
            duration_text: result.duration_result.text().unwrap_or_default().to_string(),
        }
    }

    fn shows_route(&self) -> bool {
        self.status == LookupStatus::Ok
            && !self.distance_text.is_empty()
            && !self.duration_text.is_empty()
    }
}

async fn fetch_welcome() -> Result<String, JsValue> {
    let mut opts = RequestInit::new();
    opts.method("GET");
    opts.mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(BACKEND_URL, &opts)?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "welcome request failed with status {}",
            resp.status()
        )));
    }

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("welcome body is not text"))
}

async fn post_trip(trip: TripRequest) -> Result<TripResult, JsValue> {
    let body = serde_json::to_string(&trip).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    opts.body(Some(&JsValue::from_str(&body)));

    let request = Request::new_with_str_and_init(BACKEND_URL, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "server answered with status {}",
            resp.status()
        )));
    }

    let text = JsFuture::from(resp.text()?).await?;
    let text = text
        .as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))?;

    serde_json::from_str(&text).map_err(|e| JsValue::from_str(&e.to_string()))
}

struct DistanceForm {
    form: FormData,
    result: ResultData,
}

enum FormMsg {
    UpdateField { name: String, value: String },
    Submit,
    GotResult(TripResult),
    SubmitFailed(String),
}

impl DistanceForm {
    fn result_view(&self) -> Html {
        if self.result.shows_route() {
            html! {
                <div>
                    <h3>{ format!("Distance: {}", self.result.distance_text) }</h3>
                    <h3>{ format!("Duration: {}", self.result.duration_text) }</h3>
                </div>
            }
        } else if self.result.status == LookupStatus::Error {
            html! {
                <div>
                    <h3>{ "Couldn't find result... " }</h3>
                </div>
            }
        } else {
            html! {}
        }
    }
}

impl Component for DistanceForm {
    type Message = FormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        DistanceForm {
            form: FormData::initial(),
            result: ResultData::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FormMsg::UpdateField { name, value } => {
                self.form = self.form.set(&name, value);
                true
            }
            FormMsg::Submit => {
                let trip = self.form.to_request();
                ctx.link().send_future(async move {
                    match post_trip(trip).await {
                        Ok(result) => FormMsg::GotResult(result),
                        Err(e) => FormMsg::SubmitFailed(format!("{:?}", e)),
                    }
                });
                false
            }
            FormMsg::GotResult(result) => {
                self.result = ResultData::from_trip_result(&result);
                self.form = FormData::cleared();
                true
            }
            FormMsg::SubmitFailed(err) => {
                log::error!("Error posting trip to server: {}", err);
                // Display keeps its previous value, only the form resets.
                self.form = FormData::cleared();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let update_field = link.callback(|input_event: InputEvent| {
            let input: HtmlInputElement = input_event.target().unwrap().dyn_into().unwrap();
            FormMsg::UpdateField {
                name: input.name(),
                value: input.value(),
            }
        });

        let on_mode_change = link.callback(|change_event: Event| {
            let input: HtmlInputElement = change_event.target().unwrap().dyn_into().unwrap();
            FormMsg::UpdateField {
                name: input.name(),
                value: input.value(),
            }
        });

        let on_submit = link.callback(|submit_event: SubmitEvent| {
            submit_event.prevent_default();
            FormMsg::Submit
        });

        let mode_radios = TravelMode::ALL.iter().map(|mode| {
            html! {
                <>
                    <label for={mode.as_str()}>{ mode.label() }</label>
                    <input
                        type="radio"
                        id={mode.as_str()}
                        name="travelMode"
                        value={mode.as_str()}
                        checked={self.form.travel_mode == mode.as_str()}
                        onchange={on_mode_change.clone()}
                    /> <br />
                </>
            }
        });

        html! {
            <>
                <form onsubmit={on_submit}>
                    <label for="startInput">{ "ENTER STARTING POINT: " }</label>
                    <input
                        type="text"
                        id="startInput"
                        name="startInput"
                        placeholder="Starting Point"
                        value={self.form.start_input.clone()}
                        oninput={update_field.clone()}
                    />
                    <br />
                    <label for="destinationInput">{ "ENTER DESTINATION: " }</label>
                    <input
                        type="text"
                        id="destinationInput"
                        name="destinationInput"
                        placeholder="Destination"
                        value={self.form.destination_input.clone()}
                        oninput={update_field}
                    />
                    <br />
                    <span>{ "SELECT MODE OF TRAVEL:" }</span> <br />
                    { for mode_radios }
                    <button>{ "Calculate Distance" }</button>
                </form>
                { self.result_view() }
            </>
        }
    }
}

struct App {
    message: String,
}

enum AppMsg {
    Welcome(String),
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        // The greeting comes from the backend's GET / on first render.
        ctx.link().send_future(async {
            match fetch_welcome().await {
                Ok(message) => AppMsg::Welcome(message),
                Err(e) => {
                    log::error!("Error fetching welcome message: {:?}", e);
                    AppMsg::Welcome(String::new())
                }
            }
        });

        App {
            message: String::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Welcome(message) => {
                self.message = message;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <h1>{ "Distance Calculator!" }</h1>
                <p>{ self.message.clone() }</p>
                <DistanceForm />
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use trip_distance_shared::trips::{Measure, TextValue, TripResult};

    use crate::{FormData, ResultData};

    #[test]
    fn test_set_preserves_unrelated_fields() {
        let form = FormData {
            start_input: "Seattle".to_string(),
            destination_input: "Portland".to_string(),
            travel_mode: "driving".to_string(),
        };

        let updated = form.set("travelMode", "transit".to_string());

        assert_eq!(updated.start_input, "Seattle");
        assert_eq!(updated.destination_input, "Portland");
        assert_eq!(updated.travel_mode, "transit");
    }

    #[test]
    fn test_set_unknown_field_changes_nothing() {
        let form = FormData::initial();
        assert_eq!(form.set("bogusField", "x".to_string()), form);
    }

    #[test]
    fn test_cleared_empties_every_field_including_mode() {
        let cleared = FormData::cleared();

        assert_eq!(cleared.start_input, "");
        assert_eq!(cleared.destination_input, "");
        assert_eq!(cleared.travel_mode, "");
    }

    #[test]
    fn test_initial_form_preselects_driving() {
        assert_eq!(FormData::initial().travel_mode, "driving");
    }

    #[test]
    fn test_result_extraction_keeps_only_text() {
        let result = TripResult::found(
            TextValue {
                text: "173 mi".to_string(),
                value: 278000,
            },
            TextValue {
                text: "2 hr 50 min".to_string(),
                value: 10200,
            },
        );

        let display = ResultData::from_trip_result(&result);

        assert_eq!(display.distance_text, "173 mi");
        assert_eq!(display.duration_text, "2 hr 50 min");
        assert!(display.shows_route());
    }

    #[test]
    fn test_error_result_renders_nothing_as_route() {
        let display = ResultData::from_trip_result(&TripResult::not_found());

        assert_eq!(display.distance_text, "");
        assert_eq!(display.duration_text, "");
        assert!(!display.shows_route());
    }

    #[test]
    fn test_fresh_display_shows_neither_view() {
        let display = ResultData::default();

        assert!(!display.shows_route());
        assert_ne!(
            display.status,
            trip_distance_shared::trips::LookupStatus::Error
        );
    }

    #[test]
    fn test_partial_result_does_not_render_a_route() {
        // An OK result missing one measure must not show the success view.
        let result = TripResult {
            status: trip_distance_shared::trips::LookupStatus::Ok,
            distance_result: Measure::Present(TextValue {
                text: "173 mi".to_string(),
                value: 278000,
            }),
            duration_result: Measure::empty(),
        };

        assert!(!ResultData::from_trip_result(&result).shows_route());
    }
}
