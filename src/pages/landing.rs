use yew::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::components::contact_form::ContactForm;
use crate::contact;

fn open_advisor_chat() {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(&contact::advisor_chat_url(), "_blank");
    }
}

fn scroll_to_form() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(section) = document.get_element_by_id("contacto") {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

struct Service {
    accent: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    cta: &'static str,
}

const SERVICES: [Service; 3] = [
    Service {
        accent: "accent-blue",
        icon: "📄",
        title: "Kit Emprendedor NAB",
        description: "Formaliza tu empresa con todo lo necesario: escritura, inicio de \
            actividades en el SII, verificación de giro y habilitación para emitir facturas. \
            Si no tienes dirección comercial, puedes usar la tuya o contratar una oficina \
            virtual anual.",
        cta: "Quiero formalizar mi empresa",
    },
    Service {
        accent: "accent-green",
        icon: "🧮",
        title: "Plan IVA Simplificado",
        description: "Contabilidad mensual para empresas ya constituidas: cálculo y \
            declaración de IVA, emisión de hasta 15 facturas mensuales, y reportes claros. \
            Las boletas las emite el cliente.",
        cta: "Necesito ayuda con mi IVA",
    },
    Service {
        accent: "accent-purple",
        icon: "👥",
        title: "Pack Gestión Laboral Total",
        description: "Ideal para microempresas con pocos trabajadores. Incluye contratos, \
            liquidaciones de sueldo, Previred, finiquitos y asesoría básica en RRHH.",
        cta: "Quiero ordenar la parte laboral",
    },
];

struct Benefit {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const BENEFITS: [Benefit; 4] = [
    Benefit {
        icon: "💙",
        title: "Acompañamiento personalizado",
        description: "Te guiamos paso a paso en todo el proceso.",
    },
    Benefit {
        icon: "💰",
        title: "Precios accesibles",
        description: "Tarifas justas diseñadas para emprendedores.",
    },
    Benefit {
        icon: "🛡️",
        title: "Todo en un solo lugar",
        description: "Servicios integrales para todas tus necesidades.",
    },
    Benefit {
        icon: "🎧",
        title: "Atención directa por WhatsApp",
        description: "Comunicación rápida y directa cuando lo necesites.",
    },
];

struct Testimonial {
    quote: &'static str,
    initial: &'static str,
    name: &'static str,
    byline: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "\"Tenía todo listo para vender mis productos naturales, pero no sabía cómo \
            formalizar mi negocio. Me hablaron de NAB y en menos de una semana ya tenía mi \
            empresa registrada, con dirección tributaria y lista para emitir facturas.\"",
        initial: "D",
        name: "Daniela",
        byline: "Emprendedora en San Bernardo",
    },
    Testimonial {
        quote: "\"Formar mi empresa era un paso importante y no sabía bien por dónde partir, \
            hasta que conocí Asesorías NAB. Una empresa confiable, rápida y muy cercana. \
            Siempre atentos y disponibles cuando los he necesitado. Su acompañamiento fue \
            clave para dar este paso con tranquilidad. Gracias a ellos, hoy Alemaral Terapias \
            es una empresa formalizada que camina con bases firmes. Los recomiendo con total \
            confianza si estás buscando formalizar tu empresa o tu emprendimiento.\"",
        initial: "M",
        name: "Marisol Alcayaga",
        byline: "Representante Legal Alemaral Terapias Spa",
    },
    Testimonial {
        quote: "\"Ya tenía mi empresa funcionando, pero cada mes era un caos con el IVA. Me \
            contacté con NAB y ahora ellos se encargan de todo. Me envían los reportes claros, \
            me ayudan con las facturas, y yo puedo enfocarme en atender a mis clientes.\"",
        initial: "L",
        name: "Luis",
        byline: "Dueño de taller mecánico en Maipú",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let on_advisor_click = Callback::from(|_: MouseEvent| open_advisor_chat());
    let on_start_click = Callback::from(|_: MouseEvent| scroll_to_form());

    html! {
        <div class="landing-page">
            <style>
                {r#"
                .landing-page {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto,
                        Helvetica, Arial, sans-serif;
                    color: #1f2937;
                    background: #fff;
                    margin: 0;
                }
                .landing-page h1, .landing-page h2, .landing-page h3, .landing-page h4 {
                    margin: 0 0 1rem;
                }
                .landing-page p {
                    margin: 0 0 1rem;
                }
                .container {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .hero {
                    background: linear-gradient(135deg, #2563eb, #1d4ed8 50%, #1e40af);
                    color: #fff;
                    padding: 1.5rem 0 4rem;
                }
                .hero-topnav {
                    display: flex;
                    justify-content: flex-end;
                    margin-bottom: 1rem;
                }
                .hero-topnav a {
                    color: #fff;
                    text-decoration: none;
                    background: rgba(255, 255, 255, 0.1);
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    transition: background 0.3s;
                }
                .hero-topnav a:hover {
                    background: rgba(255, 255, 255, 0.2);
                }
                .logo-card {
                    background: #fff;
                    border-radius: 16px;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
                    width: 176px;
                    height: 96px;
                    margin: 0 auto 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 4px;
                }
                .logo-card img {
                    max-width: 100%;
                    max-height: 100%;
                    object-fit: contain;
                }
                .hero-copy {
                    max-width: 820px;
                    margin: 0 auto;
                    text-align: center;
                }
                .hero-copy h1 {
                    font-size: 2.8rem;
                    line-height: 1.15;
                    font-weight: 800;
                }
                .hero-copy h1 .highlight {
                    color: #fde047;
                }
                .hero-subtitle {
                    font-size: 1.3rem;
                    color: #dbeafe;
                    margin-bottom: 2rem;
                }
                .hero-subtitle .strong {
                    display: block;
                    margin-top: 0.5rem;
                    color: #fff;
                    font-weight: 600;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }
                .cta-primary {
                    background: #facc15;
                    color: #1e3a8a;
                    border: none;
                    border-radius: 8px;
                    padding: 1rem 2rem;
                    font-size: 1.1rem;
                    font-weight: 700;
                    cursor: pointer;
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.25);
                    transition: transform 0.3s, background 0.3s;
                }
                .cta-primary:hover {
                    background: #fde047;
                    transform: scale(1.05);
                }
                .cta-outline {
                    background: transparent;
                    color: #fff;
                    border: 2px solid #fff;
                    border-radius: 8px;
                    padding: 1rem 2rem;
                    font-size: 1.1rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: background 0.3s, color 0.3s;
                }
                .cta-outline:hover {
                    background: #fff;
                    color: #1d4ed8;
                }

                .services {
                    background: #f9fafb;
                    padding: 5rem 0;
                }
                .section-header {
                    text-align: center;
                    margin-bottom: 3.5rem;
                }
                .section-header h2 {
                    font-size: 2.2rem;
                    font-weight: 800;
                }
                .section-header p {
                    font-size: 1.15rem;
                    color: #4b5563;
                    max-width: 700px;
                    margin: 0 auto;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .service-card {
                    background: #fff;
                    border-radius: 12px;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                    padding: 2rem;
                    border-top: 4px solid #2563eb;
                    transition: transform 0.3s, box-shadow 0.3s;
                    display: flex;
                    flex-direction: column;
                }
                .service-card:hover {
                    transform: translateY(-8px);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
                }
                .service-card.accent-green { border-top-color: #16a34a; }
                .service-card.accent-purple { border-top-color: #9333ea; }
                .service-icon {
                    width: 64px;
                    height: 64px;
                    border-radius: 50%;
                    background: #dbeafe;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.8rem;
                    margin: 0 auto 1rem;
                }
                .accent-green .service-icon { background: #dcfce7; }
                .accent-purple .service-icon { background: #f3e8ff; }
                .service-card h3 {
                    text-align: center;
                    font-size: 1.4rem;
                }
                .service-card p {
                    color: #374151;
                    line-height: 1.6;
                    flex-grow: 1;
                }
                .service-cta {
                    width: 100%;
                    background: #2563eb;
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 0.85rem;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.3s;
                }
                .service-cta:hover { background: #1d4ed8; }
                .accent-green .service-cta { background: #16a34a; }
                .accent-green .service-cta:hover { background: #15803d; }
                .accent-purple .service-cta { background: #9333ea; }
                .accent-purple .service-cta:hover { background: #7e22ce; }

                .benefits { padding: 5rem 0; }
                .benefits-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }
                .benefit {
                    text-align: center;
                    padding: 1.5rem;
                    border-radius: 12px;
                    transition: background 0.3s;
                }
                .benefit:hover { background: #eff6ff; }
                .benefit-icon {
                    width: 64px;
                    height: 64px;
                    border-radius: 50%;
                    background: #dbeafe;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.8rem;
                    margin: 0 auto 1rem;
                }
                .benefit h3 { font-size: 1.2rem; }
                .benefit p { color: #4b5563; }

                .testimonials {
                    padding: 5rem 0;
                    background: linear-gradient(90deg, #eff6ff, #eef2ff);
                }
                .testimonials-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .testimonial {
                    background: #fff;
                    border-radius: 12px;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                    padding: 2rem;
                }
                .testimonial-stars {
                    color: #facc15;
                    font-size: 1.2rem;
                    letter-spacing: 0.2rem;
                    text-align: center;
                    margin-bottom: 1.25rem;
                }
                .testimonial blockquote {
                    margin: 0 0 1.5rem;
                    color: #374151;
                    line-height: 1.6;
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .testimonial-avatar {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #4ade80, #3b82f6);
                    color: #fff;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .testimonial-author .name { font-weight: 700; }
                .testimonial-author .byline {
                    color: #4b5563;
                    font-size: 0.9rem;
                }

                .contact-section { padding: 5rem 0; }
                .contact-panel {
                    background: #f9fafb;
                    border-radius: 16px;
                    padding: 3rem;
                    max-width: 820px;
                    margin: 0 auto;
                }
                .contact-form .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .contact-form .form-field {
                    margin-bottom: 1.5rem;
                }
                .contact-form label {
                    display: block;
                    font-weight: 600;
                    font-size: 0.9rem;
                    margin-bottom: 0.5rem;
                    color: #374151;
                }
                .contact-form input,
                .contact-form select,
                .contact-form textarea {
                    width: 100%;
                    padding: 0.8rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    font-size: 1rem;
                    box-sizing: border-box;
                    transition: border-color 0.3s, box-shadow 0.3s;
                }
                .contact-form input:focus,
                .contact-form select:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: #3b82f6;
                    box-shadow: 0 0 0 2px rgba(59, 130, 246, 0.3);
                }
                .contact-form textarea { resize: none; }
                .form-actions { text-align: center; }
                .submit-button {
                    background: #2563eb;
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 1rem 3rem;
                    font-size: 1.1rem;
                    font-weight: 700;
                    cursor: pointer;
                    box-shadow: 0 8px 20px rgba(37, 99, 235, 0.35);
                    transition: background 0.3s, transform 0.3s;
                }
                .submit-button:hover:enabled {
                    background: #1d4ed8;
                    transform: scale(1.05);
                }
                .submit-button:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                .form-confirmation {
                    text-align: center;
                    padding: 3rem 0;
                }
                .confirmation-icon {
                    width: 64px;
                    height: 64px;
                    border-radius: 50%;
                    background: #dcfce7;
                    color: #16a34a;
                    font-size: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin: 0 auto 1rem;
                }

                .closing {
                    background: linear-gradient(135deg, #2563eb, #1d4ed8 50%, #1e40af);
                    color: #fff;
                    padding: 5rem 0;
                    text-align: center;
                }
                .closing h2 { font-size: 2rem; }
                .closing p {
                    color: #dbeafe;
                    font-size: 1.15rem;
                    margin-bottom: 2rem;
                }

                .footer {
                    background: #1f2937;
                    color: #fff;
                    padding: 3rem 0 1.5rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                    text-align: center;
                }
                .footer .logo-card {
                    width: 128px;
                    height: 64px;
                    margin-bottom: 1rem;
                }
                .footer p, .footer span { color: #d1d5db; }
                .footer h4 {
                    font-size: 1.1rem;
                    margin-bottom: 1rem;
                }
                .footer-links a {
                    color: #9ca3af;
                    text-decoration: none;
                    border: 1px solid #4b5563;
                    border-radius: 6px;
                    padding: 0.3rem 0.8rem;
                    font-size: 0.85rem;
                    transition: color 0.3s, border-color 0.3s;
                }
                .footer-links a:hover {
                    color: #d1d5db;
                    border-color: #9ca3af;
                }
                .footer-contact div { margin-bottom: 0.5rem; }
                .footer-social {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    margin-top: 0.5rem;
                }
                .footer-social a {
                    color: #d1d5db;
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .footer-social a:hover { color: #fff; }
                .footer-bottom {
                    border-top: 1px solid #374151;
                    margin-top: 2rem;
                    padding-top: 1.5rem;
                    text-align: center;
                    color: #9ca3af;
                }

                .whatsapp-fab {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    background: #25D366;
                    color: #fff;
                    border: none;
                    border-radius: 50%;
                    width: 60px;
                    height: 60px;
                    font-size: 1.8rem;
                    cursor: pointer;
                    box-shadow: 0 12px 30px rgba(0, 0, 0, 0.3);
                    transition: transform 0.3s, background 0.3s;
                    z-index: 50;
                }
                .whatsapp-fab:hover {
                    background: #20BA5C;
                    transform: scale(1.1);
                }

                @media (max-width: 768px) {
                    .hero-copy h1 { font-size: 2rem; }
                    .contact-form .form-row { grid-template-columns: 1fr; }
                    .contact-panel { padding: 2rem; }
                }
                "#}
            </style>

            <header class="hero">
                <div class="container">
                    <div class="hero-topnav">
                        <a href="https://asesoriasnab.cl/corporativa" target="_self" rel="noopener noreferrer">
                            {"Ir a Corporativo →"}
                        </a>
                    </div>
                    <div class="logo-card">
                        <img src="/logo.png" alt="Asesorías NAB" />
                    </div>
                    <div class="hero-copy">
                        <h1>
                            {"¡Formaliza tu emprendimiento hoy con el "}
                            <span class="highlight">{"Kit Emprendedor NAB!"}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"Desde la escritura y el inicio de actividades en el SII hasta emitir tu primera factura. "}
                            <span class="strong">{"Nosotros te guiamos paso a paso."}</span>
                        </p>
                        <div class="hero-cta-group">
                            <button class="cta-primary" onclick={on_start_click.clone()}>
                                {"Quiero comenzar mi negocio →"}
                            </button>
                            <button class="cta-outline" onclick={on_advisor_click.clone()}>
                                {"💬 Habla con un asesor ahora"}
                            </button>
                        </div>
                    </div>
                </div>
            </header>

            <section class="services">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Nuestros Servicios Especializados"}</h2>
                        <p>{"Todo lo que necesitas para formalizar y hacer crecer tu emprendimiento"}</p>
                    </div>
                    <div class="services-grid">
                        {
                            for SERVICES.iter().map(|service| html! {
                                <div class={classes!("service-card", service.accent)}>
                                    <div class="service-icon">{service.icon}</div>
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                    <button class="service-cta" onclick={on_start_click.clone()}>
                                        {service.cta}
                                    </button>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="benefits">
                <div class="container">
                    <div class="section-header">
                        <h2>{"¿Por qué elegir Asesorías NAB?"}</h2>
                    </div>
                    <div class="benefits-grid">
                        {
                            for BENEFITS.iter().map(|benefit| html! {
                                <div class="benefit">
                                    <div class="benefit-icon">{benefit.icon}</div>
                                    <h3>{benefit.title}</h3>
                                    <p>{benefit.description}</p>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="testimonials">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Historias reales de emprendedores"}</h2>
                    </div>
                    <div class="testimonials-grid">
                        {
                            for TESTIMONIALS.iter().map(|testimonial| html! {
                                <div class="testimonial">
                                    <div class="testimonial-stars">{"★★★★★"}</div>
                                    <blockquote>{testimonial.quote}</blockquote>
                                    <div class="testimonial-author">
                                        <div class="testimonial-avatar">{testimonial.initial}</div>
                                        <div>
                                            <div class="name">{testimonial.name}</div>
                                            <div class="byline">{testimonial.byline}</div>
                                        </div>
                                    </div>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section id="contacto" class="contact-section">
                <div class="container">
                    <div class="section-header">
                        <h2>{"¿Listo para dar el siguiente paso?"}</h2>
                        <p>{"Cuéntanos sobre tu emprendimiento"}</p>
                    </div>
                    <div class="contact-panel">
                        <ContactForm />
                    </div>
                </div>
            </section>

            <section class="closing">
                <div class="container">
                    <h2>{"¿Listo para formalizar tu negocio y avanzar con confianza?"}</h2>
                    <p>{"Completa el formulario o habla con un asesor por WhatsApp. ¡Estamos aquí para ayudarte!"}</p>
                    <button class="cta-primary" onclick={on_start_click}>
                        {"Quiero comenzar ahora →"}
                    </button>
                </div>
            </section>

            <footer class="footer">
                <div class="container">
                    <div class="footer-grid">
                        <div>
                            <div class="logo-card">
                                <img src="/logo.png" alt="Asesorías NAB" />
                            </div>
                            <p>{"Tu partner confiable para formalizar y hacer crecer tu emprendimiento en Chile."}</p>
                            <div class="footer-links">
                                <a href="https://asesoriasnab.cl/reportes/reporteandina.html" target="_self" rel="noopener noreferrer">
                                    {"Reportabilidad"}
                                </a>
                            </div>
                        </div>
                        <div class="footer-contact">
                            <h4>{"Contacto"}</h4>
                            <div>{"📞 +56 9 89164896"}</div>
                            <div>{"📞 +56 9 97165450"}</div>
                            <div>{"✉️ nastorga@asesoriasnab.cl"}</div>
                            <div>{"✉️ vmacaya@asesoriasnab.cl"}</div>
                            <div>{"📍 Santiago, Chile"}</div>
                        </div>
                        <div>
                            <h4>{"Horarios"}</h4>
                            <p>{"Lunes a Viernes: 9:00 - 18:00"}</p>
                            <p>{"Sábados: 9:00 - 13:00"}</p>
                            <p>{"Domingos: Cerrado"}</p>
                            <h4>{"Nuestras redes"}</h4>
                            <div class="footer-social">
                                <a
                                    href="https://www.instagram.com/asesorias_integrales_nab"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label="Síguenos en Instagram"
                                >
                                    {"Instagram"}
                                </a>
                                <a
                                    href="https://www.linkedin.com/company/asesorias-integrales-nab/"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label="Síguenos en LinkedIn"
                                >
                                    {"LinkedIn"}
                                </a>
                            </div>
                        </div>
                    </div>
                    <div class="footer-bottom">
                        <p>{"© 2025 Asesorías NAB. Todos los derechos reservados."}</p>
                    </div>
                </div>
            </footer>

            <button
                class="whatsapp-fab"
                onclick={on_advisor_click}
                aria-label="Habla con un asesor por WhatsApp"
            >
                {"💬"}
            </button>
        </div>
    }
}
