use chrono::Datelike;
use yew::prelude::*;

struct Stat {
    value: &'static str,
    label: &'static str,
    sub: &'static str,
}

struct Problem {
    title: &'static str,
    impact: &'static str,
}

struct Phase {
    name: &'static str,
    desc: &'static str,
    detail: &'static str,
}

const STATS: &[Stat] = &[
    Stat { value: "$100M+", label: "Revenue recovered", sub: "200-location specialty group" },
    Stat { value: "50%", label: "Patient leakage eliminated", sub: "Industry average vs. Tether" },
    Stat { value: "46x", label: "Return on investment", sub: "Per location, per year" },
];

const PROBLEMS: &[Problem] = &[
    Problem {
        title: "Referral chaos",
        impact: "PCPs fax incomplete information. Front desk spends 5+ hours/week chasing data.",
    },
    Problem {
        title: "Patient leakage",
        impact: "50% never complete. That's $5,000 lifetime value lost per patient.",
    },
    Problem {
        title: "Zero visibility",
        impact: "PE firms have no idea which providers drive value. No data. No optimization.",
    },
    Problem {
        title: "Manual operations",
        impact: "Everything tracked in spreadsheets. No automation. No intelligence.",
    },
];

const PHASES: &[Phase] = &[
    Phase {
        name: "Capture",
        desc: "Digital intake replaces fax. Complete patient data, structured, every time.",
        detail: "60-second PCP form · Auto-validation · File attachments",
    },
    Phase {
        name: "Engage",
        desc: "Instant patient notification. Reduce no-shows before they happen.",
        detail: "SMS automation · Appointment reminders · Two-way communication",
    },
    Phase {
        name: "Coordinate",
        desc: "Real-time dashboard shows every referral, every status, every outcome.",
        detail: "Live tracking · Status updates · Team collaboration",
    },
    Phase {
        name: "Optimize",
        desc: "Know which providers drive value. Know which patients complete. Know everything.",
        detail: "Provider performance · Completion funnels · Revenue attribution",
    },
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_request_demo: Callback<()>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let request_demo = {
        let on_request_demo = props.on_request_demo.clone();
        Callback::from(move |_: MouseEvent| on_request_demo.emit(()))
    };
    let year = chrono::Local::now().year();

    html! {
        <div class="landing">
            <style>{LANDING_CSS}</style>

            <section class="hero">
                <div class="hero-glow hero-glow--left"></div>
                <div class="hero-glow hero-glow--right"></div>
                <div class="hero-content">
                    <div class="hero-badge">{"PE-BACKED SPECIALTY PRACTICES"}</div>
                    <h1>
                        {"Turn chaos"}<br />
                        <span class="gradient-text">{"into conversion"}</span>
                    </h1>
                    <p class="hero-sub">
                        {"Turn referral chaos into revenue."}<br />
                        {"The intelligent platform for PE-backed practices."}
                    </p>
                    <button class="cta-button cta-button--large" onclick={request_demo.clone()}>
                        {"See the platform"}
                        <i class="arrow">{"→"}</i>
                    </button>
                </div>
            </section>

            <section class="section">
                <div class="stat-grid">
                    { for STATS.iter().map(|stat| html! {
                        <div class="stat-tile">
                            <div class="stat-value gradient-text">{stat.value}</div>
                            <p class="stat-label">{stat.label}</p>
                            <p class="stat-sub">{stat.sub}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section section--tinted">
                <div class="narrow">
                    <h2>{"The silent profit killer"}</h2>
                    <p class="section-lead">
                        {"Every day, patients disappear between referral and appointment."}<br />
                        {"Fax machines. Incomplete data. Zero visibility."}<br />
                        <span class="emphasis">{"Your operations team is drowning. Your revenue is bleeding."}</span>
                    </p>
                    <div class="problem-grid">
                        { for PROBLEMS.iter().map(|problem| html! {
                            <div class="card">
                                <h3>{problem.title}</h3>
                                <p>{problem.impact}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="narrow">
                    <h2>{"Intelligent coordination"}</h2>
                    <p class="section-lead">{"End-to-end patient journey automation"}</p>
                    { for PHASES.iter().enumerate().map(|(i, phase)| html! {
                        <div class="card phase">
                            <div class="phase-number">{format!("{:02}", i + 1)}</div>
                            <div>
                                <h3>{phase.name}</h3>
                                <p class="phase-desc">{phase.desc}</p>
                                <p class="phase-detail">{phase.detail}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section section--tinted">
                <div class="testimonial">
                    <div class="testimonial-number gradient-text">{"23"}</div>
                    <p class="testimonial-caption">{"patients recovered in first month"}</p>
                    <p class="testimonial-quote">
                        {"\"That's $115K in lifetime value we would have lost to the void.\""}
                    </p>
                    <div class="testimonial-author">{"Dr. Micah Belzberg"}</div>
                    <div class="testimonial-org">{"Forefront Dermatology"}</div>
                </div>
            </section>

            <section class="section final-cta">
                <h2>{"Stop losing revenue"}</h2>
                <button class="cta-button cta-button--large" onclick={request_demo}>
                    {"Request Demo"}
                </button>
            </section>

            <footer class="footer">
                <p>{format!("© {} Tether · Turn chaos into conversion", year)}</p>
            </footer>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing {
        min-height: 100vh;
        background: #0a0e27;
        color: #ffffff;
        overflow-x: hidden;
        font-weight: 300;
    }
    .gradient-text {
        background: linear-gradient(to right, #60a5fa, #3b82f6);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        position: relative;
        padding: 5rem 1.5rem 0;
        text-align: center;
    }
    .hero-glow {
        position: absolute;
        width: 24rem;
        height: 24rem;
        border-radius: 50%;
        filter: blur(64px);
        background: rgba(59, 130, 246, 0.2);
    }
    .hero-glow--left { top: 25%; left: 25%; }
    .hero-glow--right { bottom: 25%; right: 25%; background: rgba(96, 165, 250, 0.15); }
    .hero-content {
        position: relative;
        z-index: 1;
        max-width: 72rem;
    }
    .hero-badge {
        display: inline-block;
        margin-bottom: 2rem;
        padding: 0.5rem 1.25rem;
        border-radius: 999px;
        background: rgba(59, 130, 246, 0.1);
        border: 1px solid rgba(59, 130, 246, 0.2);
        color: #93c5fd;
        font-size: 0.875rem;
        letter-spacing: 0.05em;
    }
    .hero h1 {
        font-size: clamp(4rem, 12vw, 10rem);
        font-weight: 300;
        line-height: 1;
        margin-bottom: 2.5rem;
    }
    .hero-sub {
        font-size: 1.75rem;
        color: #9ca3af;
        margin-bottom: 4rem;
        line-height: 1.6;
    }
    .cta-button {
        display: inline-flex;
        align-items: center;
        gap: 0.75rem;
        border: none;
        border-radius: 999px;
        background: linear-gradient(to right, #3b82f6, #2563eb);
        color: #fff;
        padding: 0.75rem 2rem;
        font-size: 1rem;
        cursor: pointer;
        transition: transform 0.2s ease;
        box-shadow: 0 12px 32px rgba(59, 130, 246, 0.3);
    }
    .cta-button:hover { transform: scale(1.05); }
    .cta-button--large { padding: 1.5rem 3.5rem; font-size: 1.125rem; }
    .section { padding: 10rem 1.5rem; }
    .section--tinted {
        background: linear-gradient(to bottom, transparent, rgba(255, 255, 255, 0.05), transparent);
    }
    .section h2 {
        font-size: clamp(3rem, 7vw, 4.5rem);
        font-weight: 300;
        text-align: center;
        margin-bottom: 3rem;
    }
    .section-lead {
        font-size: 1.5rem;
        color: #9ca3af;
        text-align: center;
        line-height: 1.6;
        margin-bottom: 5rem;
    }
    .emphasis { color: #fff; font-weight: 400; }
    .narrow { max-width: 64rem; margin: 0 auto; }
    .stat-grid, .problem-grid {
        display: grid;
        gap: 2rem;
        max-width: 80rem;
        margin: 0 auto;
    }
    .stat-grid { grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }
    .problem-grid { grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); }
    .stat-tile, .card {
        background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.05), transparent);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 24px;
        padding: 2.5rem;
        transition: border-color 0.2s ease;
    }
    .stat-tile:hover, .card:hover { border-color: rgba(59, 130, 246, 0.3); }
    .stat-tile { text-align: center; }
    .stat-value { font-size: 5rem; margin-bottom: 1rem; }
    .stat-label { font-size: 1.25rem; margin-bottom: 0.5rem; }
    .stat-sub { color: #6b7280; font-size: 0.875rem; }
    .card h3 { font-size: 1.25rem; font-weight: 400; margin-bottom: 0.75rem; }
    .card p { color: #9ca3af; line-height: 1.6; }
    .phase { display: flex; gap: 2rem; align-items: flex-start; margin-bottom: 1.5rem; }
    .phase-number { font-size: 4.5rem; font-weight: 200; color: rgba(96, 165, 250, 0.25); }
    .phase h3 { font-size: 1.875rem; font-weight: 300; }
    .phase-desc { font-size: 1.25rem; color: #d1d5db !important; margin-bottom: 1rem; }
    .phase-detail { font-size: 0.875rem; color: #6b7280 !important; }
    .testimonial {
        max-width: 56rem;
        margin: 0 auto;
        text-align: center;
        padding: 4rem;
        border-radius: 24px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.1), rgba(255, 255, 255, 0.05));
    }
    .testimonial-number { font-size: 6rem; font-weight: 200; }
    .testimonial-caption { font-size: 1.25rem; color: #d1d5db; margin-bottom: 2rem; }
    .testimonial-quote { font-size: 1.25rem; font-style: italic; color: #9ca3af; margin-bottom: 2rem; }
    .testimonial-author { font-size: 1.125rem; }
    .testimonial-org { font-size: 0.875rem; color: #9ca3af; }
    .final-cta { text-align: center; }
    .footer {
        padding: 4rem 1.5rem;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        text-align: center;
        color: #4b5563;
        font-size: 0.875rem;
    }
    @media (max-width: 768px) {
        .hero-sub { font-size: 1.25rem; }
        .section { padding: 6rem 1.25rem; }
        .phase { flex-direction: column; gap: 0.5rem; }
    }
"#;
