use log::debug;
use stylist::GlobalStyle;

use crate::error::Result;

/// Mounts the site stylesheet into the document head.
///
/// Call once at start-up. Sections only reference class names from here.
pub fn mount_global_styles() -> Result<()> {
    GlobalStyle::new(SITE_CSS)?;
    debug!("Mounted global stylesheet");
    Ok(())
}

pub const SITE_CSS: &str = r#"
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #111827;
        background: #0b0b12;
    }
    a {
        color: inherit;
        text-decoration: none;
    }

    .site-root {
        position: relative;
        min-height: 100vh;
    }
    .site-background {
        position: fixed;
        inset: 0;
        width: 100vw;
        height: 100vh;
        background-size: cover;
        background-position: center;
        background-repeat: no-repeat;
        background-attachment: fixed;
        transition: opacity 0.7s ease;
    }
    .opacity-0 {
        opacity: 0;
    }
    .opacity-100 {
        opacity: 1;
    }
    .site-content {
        position: relative;
        z-index: 10;
    }

    .container-custom {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .section-padding {
        padding: 6rem 0;
    }
    .section-header {
        text-align: center;
        margin-bottom: 4rem;
    }
    .heading-xl {
        font-size: 3.5rem;
        line-height: 1.1;
        font-weight: 800;
        margin: 0 0 1.5rem 0;
    }
    .heading-lg {
        font-size: 2.5rem;
        font-weight: 700;
        margin: 0 0 1rem 0;
    }
    .body-lg {
        font-size: 1.15rem;
        line-height: 1.7;
        max-width: 42rem;
        margin: 0 auto;
        color: #4b5563;
    }
    .gradient-text {
        background: linear-gradient(90deg, #4f46e5, #c71585);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .grid-3 {
        display: grid;
        grid-template-columns: repeat(3, minmax(0, 1fr));
        gap: 2rem;
    }
    .grid-4 {
        display: grid;
        grid-template-columns: repeat(4, minmax(0, 1fr));
        gap: 1.5rem;
    }

    .reveal {
        opacity: 0;
        transform: translateY(20px);
        transition-property: opacity, transform;
        transition-timing-function: ease-out;
    }
    .reveal.revealed {
        opacity: 1;
        transform: translateY(0);
    }

    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }
    .top-nav.scrolled {
        background: rgba(255, 255, 255, 0.92);
        backdrop-filter: blur(8px);
        box-shadow: 0 1px 12px rgba(0, 0, 0, 0.08);
    }
    .nav-content {
        display: flex;
        align-items: center;
        justify-content: space-between;
        max-width: 1200px;
        margin: 0 auto;
        padding: 1rem 1.5rem;
    }
    .nav-logo {
        font-size: 1.5rem;
        font-weight: 800;
    }
    .nav-right {
        display: flex;
        gap: 2rem;
        align-items: center;
    }
    .nav-link {
        font-weight: 500;
        opacity: 0.8;
        transition: opacity 0.2s ease;
    }
    .nav-link:hover {
        opacity: 1;
    }
    .nav-cta {
        padding: 0.6rem 1.2rem;
        border-radius: 999px;
        background: #111827;
        color: #ffffff;
        font-weight: 600;
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 4px;
        background: none;
        border: none;
        cursor: pointer;
    }
    .burger-menu span {
        display: block;
        width: 24px;
        height: 2px;
        background: currentColor;
    }

    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        text-align: center;
        color: #ffffff;
    }
    .hero .body-lg {
        color: rgba(255, 255, 255, 0.85);
    }
    .hero-cta-group {
        display: flex;
        gap: 1rem;
        justify-content: center;
        margin-top: 2.5rem;
    }
    .btn-primary {
        padding: 0.9rem 1.8rem;
        border-radius: 999px;
        background: #ffffff;
        color: #111827;
        font-weight: 600;
    }
    .btn-secondary {
        padding: 0.9rem 1.8rem;
        border-radius: 999px;
        border: 1px solid rgba(255, 255, 255, 0.6);
        font-weight: 600;
    }

    .light-section {
        background: #ffffff;
    }
    .muted-section {
        background: #f1f5f9;
    }

    .recent-strip {
        display: flex;
        gap: 1.5rem;
        overflow-x: auto;
        padding-bottom: 1rem;
    }
    .recent-item {
        flex: 0 0 260px;
    }
    .recent-item img {
        width: 100%;
        height: 170px;
        object-fit: cover;
        object-position: top;
        border-radius: 12px;
    }
    .recent-item p {
        font-weight: 600;
        margin: 0.75rem 0 0 0;
    }

    .feature-tile {
        padding: 2rem;
        border-radius: 16px;
        background: #ffffff;
        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.05);
        height: 100%;
    }
    .feature-icon {
        font-size: 2rem;
    }
    .step-number {
        font-size: 3rem;
        font-weight: 800;
        color: #e5e7eb;
    }

    .service-card {
        display: flex;
        flex-direction: column;
        align-items: center;
    }
    .service-stack {
        position: relative;
        height: 200px;
        width: 100%;
        display: flex;
        justify-content: center;
        perspective: 1000px;
    }
    .stack-image {
        position: absolute;
        width: 200px;
        transition: transform 0.5s ease;
    }
    .stack-image img {
        width: 100%;
        height: 120px;
        object-fit: cover;
        border-radius: 12px;
        box-shadow: 0 10px 20px rgba(0, 0, 0, 0.15);
    }
    .stack-front {
        z-index: 20;
        transform: translateX(-1.5rem) rotate(-12deg);
    }
    .stack-middle {
        z-index: 10;
    }
    .stack-back {
        transform: translateX(1.5rem) rotate(12deg);
    }
    .stack-front.lifted {
        transform: translateX(-1.5rem) translateY(-1rem) rotate(-12deg) scale(1.1);
    }
    .stack-middle.lifted {
        transform: translateY(-0.5rem) scale(1.05);
    }
    .service-card h3 {
        font-size: 1.5rem;
        margin-top: 2rem;
    }

    .glow-box {
        position: relative;
        transform-style: preserve-3d;
        border-radius: 16px;
    }
    .glow-box::before {
        content: "";
        position: absolute;
        inset: -1px;
        pointer-events: none;
        border-radius: inherit;
    }
    .portfolio-card::before {
        background: conic-gradient(from 90deg at 40% -25%, #ffd700, #f79d03, #ee6907, #e6390a, #de0d0d, #d61039, #cf1261, #c71585, #cf1261, #d61039, #de0d0d, #ee6907, #f79d03, #ffd700, #ffd700, #ffd700);
        filter: blur(4px);
        transform: translate3d(0px, -2px, -1px);
        opacity: 0;
        transition: opacity 0.3s ease;
    }
    .portfolio-card:hover::before {
        opacity: 1;
    }
    .testimonial-card::before {
        background: conic-gradient(from 90deg at 40% -25%, #4f46e5, #7c3aed, #6366f1, #4f46e5, #7c3aed, #6366f1, #4f46e5);
        filter: blur(10px);
        transform: translate3d(-12px, 17px, -1px);
        opacity: 1;
    }
    .card-body {
        position: relative;
        z-index: 10;
        background: #ffffff;
        border-radius: 16px;
        overflow: hidden;
    }
    .portfolio-image {
        height: 16rem;
        overflow: hidden;
    }
    .portfolio-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        object-position: top;
        transition: transform 0.5s ease;
    }
    .portfolio-image img:hover {
        transform: scale(1.05);
    }
    .card-text {
        padding: 1.5rem;
    }
    .chips {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
        margin-bottom: 1rem;
    }
    .chip {
        background: #f3f4f6;
        color: #374151;
        padding: 0.25rem 0.75rem;
        border-radius: 999px;
        font-size: 0.875rem;
        font-weight: 500;
    }
    .card-services {
        font-size: 0.875rem;
        color: #6b7280;
        border-top: 1px solid #f3f4f6;
        padding-top: 1rem;
    }
    .testimonial-card .card-body {
        padding: 2rem;
    }
    .testimonial-author {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin-bottom: 1.5rem;
    }
    .testimonial-author img {
        width: 48px;
        height: 48px;
        border-radius: 50%;
        object-fit: cover;
    }
    .testimonial-author h4 {
        margin: 0;
    }
    .testimonial-author p {
        margin: 0;
        font-size: 0.875rem;
        color: #4b5563;
    }

    .pricing-card {
        padding: 2.5rem 2rem;
        border-radius: 20px;
        background: #ffffff;
        border: 1px solid #e5e7eb;
        height: 100%;
        box-sizing: border-box;
        position: relative;
    }
    .pricing-card.highlighted {
        border: 2px solid #4f46e5;
        box-shadow: 0 20px 40px rgba(79, 70, 229, 0.15);
    }
    .pricing-badge {
        position: absolute;
        top: -0.8rem;
        left: 50%;
        transform: translateX(-50%);
        background: #4f46e5;
        color: #ffffff;
        padding: 0.2rem 0.9rem;
        border-radius: 999px;
        font-size: 0.8rem;
        font-weight: 600;
    }
    .pricing-price {
        font-size: 2.5rem;
        font-weight: 800;
    }
    .pricing-cadence {
        color: #6b7280;
        margin-left: 0.4rem;
    }
    .pricing-features {
        list-style: none;
        padding: 0;
        margin: 1.5rem 0 2rem 0;
    }
    .pricing-features li {
        padding: 0.4rem 0;
    }

    .faq-list {
        max-width: 48rem;
        margin: 0 auto;
    }
    .faq-item {
        border-bottom: 1px solid #e5e7eb;
    }
    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1.25rem 0;
        background: none;
        border: none;
        font-size: 1.1rem;
        font-weight: 600;
        text-align: left;
        cursor: pointer;
    }
    .faq-answer {
        display: none;
        padding-bottom: 1.25rem;
        color: #4b5563;
        line-height: 1.7;
    }
    .faq-item.open .faq-answer {
        display: block;
    }

    .site-footer {
        background: #0b0b12;
        color: #d1d5db;
        padding: 4rem 0 2rem 0;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: 2fr 1fr 1fr;
        gap: 2rem;
    }
    .footer-grid h4 {
        color: #ffffff;
    }
    .footer-grid ul {
        list-style: none;
        padding: 0;
    }
    .footer-grid li {
        padding: 0.3rem 0;
    }
    .footer-bottom {
        margin-top: 3rem;
        padding-top: 1.5rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        font-size: 0.875rem;
    }

    .mouse-glow {
        position: fixed;
        width: 600px;
        height: 600px;
        border-radius: 50%;
        pointer-events: none;
        background: radial-gradient(circle, rgba(99, 102, 241, 0.15), transparent 60%);
        transform: translate(-50%, -50%);
        z-index: 1;
    }

    @media (max-width: 900px) {
        .grid-3 {
            grid-template-columns: minmax(0, 1fr);
        }
        .grid-4 {
            grid-template-columns: repeat(2, minmax(0, 1fr));
        }
        .footer-grid {
            grid-template-columns: minmax(0, 1fr);
        }
        .heading-xl {
            font-size: 2.5rem;
        }
        .burger-menu {
            display: flex;
        }
        .nav-right {
            display: none;
        }
        .nav-right.mobile-menu-open {
            display: flex;
            flex-direction: column;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            background: #ffffff;
            padding: 1.5rem;
        }
        .mouse-glow {
            display: none;
        }
    }
"#;
