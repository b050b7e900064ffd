use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;
use gloo_console::log;
use gloo_timers::future::TimeoutFuture;

use crate::config;
use crate::contact::{
    send_inquiry, BusinessCategory, ContactInquiry, InquiryPayload, SubmitState,
};

/// How long the confirmation view stays up before the form comes back.
const CONFIRMATION_MILLIS: u32 = 5_000;

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let inquiry = use_state(ContactInquiry::default);
    let submit_state = use_state(|| SubmitState::Idle);

    let onsubmit = {
        let inquiry = inquiry.clone();
        let submit_state = submit_state.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // The button is disabled while submitting; this guard covers
            // submissions raised some other way (e.g. Enter in a field).
            if submit_state.is_in_flight() {
                return;
            }

            let payload = InquiryPayload::from(&*inquiry);
            let submit_state = submit_state.clone();
            submit_state.set(SubmitState::Submitting);

            spawn_local(async move {
                match send_inquiry(config::get_backend_url(), &payload).await {
                    Ok(()) => {
                        submit_state.set(SubmitState::Succeeded);
                        TimeoutFuture::new(CONFIRMATION_MILLIS).await;
                        submit_state.set(SubmitState::Idle);
                    }
                    Err(err) => {
                        log!("inquiry submission failed");
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message(err.user_message());
                        }
                        // Field values are kept so the visitor can retry as-is.
                        submit_state.set(SubmitState::Failed(err));
                    }
                }
            });
        })
    };

    let on_nombre = {
        let inquiry = inquiry.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*inquiry).clone();
            next.nombre = input.value();
            inquiry.set(next);
        })
    };

    let on_correo = {
        let inquiry = inquiry.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*inquiry).clone();
            next.correo = input.value();
            inquiry.set(next);
        })
    };

    let on_tipo = {
        let inquiry = inquiry.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*inquiry).clone();
            next.tipo_emprendimiento = select.value();
            inquiry.set(next);
        })
    };

    let on_mensaje = {
        let inquiry = inquiry.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*inquiry).clone();
            next.mensaje = textarea.value();
            inquiry.set(next);
        })
    };

    if *submit_state == SubmitState::Succeeded {
        return html! {
            <div class="form-confirmation">
                <div class="confirmation-icon">{"✓"}</div>
                <h3>{"¡Gracias!"}</h3>
                <p>{"Te contactaremos pronto."}</p>
            </div>
        };
    }

    let submitting = submit_state.is_in_flight();

    html! {
        <form onsubmit={onsubmit} class="contact-form">
            <div class="form-row">
                <div class="form-field">
                    <label for="nombre">{"Nombre completo *"}</label>
                    <input
                        type="text"
                        id="nombre"
                        name="nombre"
                        required=true
                        value={inquiry.nombre.clone()}
                        oninput={on_nombre}
                        placeholder="Ingresa tu Nombre Completo"
                    />
                </div>
                <div class="form-field">
                    <label for="correo">{"Correo electrónico *"}</label>
                    <input
                        type="email"
                        id="correo"
                        name="correo"
                        required=true
                        value={inquiry.correo.clone()}
                        oninput={on_correo}
                        placeholder="tu.correo@email.com"
                    />
                </div>
            </div>

            <div class="form-field">
                <label for="tipoEmprendimiento">{"Tipo de emprendimiento *"}</label>
                <select
                    id="tipoEmprendimiento"
                    name="tipoEmprendimiento"
                    required=true
                    onchange={on_tipo}
                >
                    <option value="" selected={inquiry.tipo_emprendimiento.is_empty()}>
                        {"Selecciona tu tipo de emprendimiento"}
                    </option>
                    {
                        for BusinessCategory::ALL.iter().map(|category| html! {
                            <option
                                value={category.code()}
                                selected={inquiry.tipo_emprendimiento == category.code()}
                            >
                                {category.label()}
                            </option>
                        })
                    }
                </select>
            </div>

            <div class="form-field">
                <label for="mensaje">{"Mensaje o consulta"}</label>
                <textarea
                    id="mensaje"
                    name="mensaje"
                    rows="4"
                    value={inquiry.mensaje.clone()}
                    oninput={on_mensaje}
                    placeholder="Cuéntanos más sobre tu emprendimiento y qué servicios necesitas..."
                />
            </div>

            <div class="form-actions">
                <button type="submit" class="submit-button" disabled={submitting}>
                    { if submitting { "Enviando..." } else { "Enviar mi consulta" } }
                </button>
            </div>
        </form>
    }
}
