use yew::prelude::*;

use crate::booking::ScooterModel;
use crate::components::booking_wizard::BookingWizard;
use crate::i18n::use_i18n;

#[function_component(Landing)]
pub fn landing() -> Html {
    let i18n = use_i18n();
    let t = |key: &str| i18n.t(key);

    html! {
        <div class="landing-page">
            <section class="hero">
                <h1>{t("hero.title")}</h1>
                <p class="hero-subtitle">{t("hero.subtitle")}</p>
                <a class="hero-cta" href="#booking">{t("hero.cta")}</a>
            </section>

            <section id="fleet" class="fleet">
                <h2>{t("fleet.title")}</h2>
                <div class="fleet-grid">
                    { for ScooterModel::ALL.into_iter().map(|model| html! {
                        <div class={classes!("fleet-item", (!model.is_available()).then(|| "coming-soon"))}>
                            <img src={model.image()} alt={t(model.name_key().as_str())} />
                            <h3>{t(model.name_key().as_str())}</h3>
                            <p>{t(model.description_key().as_str())}</p>
                            {
                                if model.is_available() {
                                    html! { <p class="fleet-price">{format!("€{} {}", model.base_price(), t("fleet.per_day"))}</p> }
                                } else {
                                    html! { <span class="badge">{t("fleet.coming_soon")}</span> }
                                }
                            }
                        </div>
                    }) }
                </div>
            </section>

            <section id="booking" class="booking-section">
                <BookingWizard translator={i18n.translator.clone()} />
            </section>

            <footer class="footer">
                <p>{format!("© Scooter Rentals. {}", t("footer.rights"))}</p>
            </footer>

            <style>
                {r#"
                .landing-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #1f2d2d;
                }

                .hero {
                    text-align: center;
                    padding: 6rem 2rem;
                    background: linear-gradient(135deg, #0b7a75 0%, #5fb3ae 100%);
                    color: #ffffff;
                }

                .hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .hero-subtitle {
                    max-width: 640px;
                    margin: 0 auto 2rem;
                    font-size: 1.2rem;
                }

                .hero-cta {
                    display: inline-block;
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    background: #f4b400;
                    color: #1f2d2d;
                    text-decoration: none;
                    font-weight: bold;
                }

                .fleet {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }

                .fleet-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }

                .fleet-item img {
                    width: 100%;
                    border-radius: 12px;
                }

                .fleet-item.coming-soon {
                    opacity: 0.7;
                }

                .booking-section {
                    padding: 4rem 1rem;
                    background: #eef5f4;
                }

                .footer {
                    text-align: center;
                    padding: 2rem;
                    color: #666;
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
