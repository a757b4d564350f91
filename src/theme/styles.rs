//! Global CSS styles for the portfolio shell.
//!
//! The transition timings here pair with the state machines in
//! portfolio-core: the notification entry/exit transitions run inside the
//! 100 ms / 300 ms windows the lifecycle grants them, and the reveal
//! classes animate when the tracker adds `visible`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg: #0b0d12;
  --bg-raised: #11141c;
  --border: #1e2230;

  /* Accent */
  --accent: #6c63ff;
  --accent-alt: #00d4aa;
  --accent-glow: rgba(108, 99, 255, 0.35);
  --gradient-accent: linear-gradient(135deg, #6c63ff 0%, #00d4aa 100%);

  /* Text */
  --text-primary: #f2f4f8;
  --text-secondary: rgba(242, 244, 248, 0.72);
  --text-muted: rgba(242, 244, 248, 0.5);

  /* Semantic */
  --success: #2ecc71;
  --error: #ff3b5c;
  --warning: #ff9f1c;

  /* Layout */
  --nav-height: 80px;
  --radius: 10px;
  --shadow: 0 12px 40px rgba(0, 0, 0, 0.45);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: 'Inter', 'Segoe UI', system-ui, sans-serif;
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--nav-height);
  z-index: 100;
  background: transparent;
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.navbar.scrolled {
  background: rgba(11, 13, 18, 0.92);
  backdrop-filter: blur(12px);
  box-shadow: 0 2px 24px rgba(0, 0, 0, 0.4);
}

.navbar-inner {
  max-width: 1080px;
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.brand {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--text-primary);
  text-decoration: none;
  letter-spacing: 0.02em;
}

.nav-menu {
  display: flex;
  gap: 1.75rem;
}

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
  font-size: 0.95rem;
  padding: 0.25rem 0;
  border-bottom: 2px solid transparent;
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.nav-link:hover {
  color: var(--text-primary);
}

.nav-link.active {
  color: var(--accent);
  border-bottom-color: var(--accent);
}

/* === Mobile toggle & menu === */
.mobile-toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
  padding: 0.5rem;
}

.toggle-bar {
  width: 24px;
  height: 2px;
  background: var(--text-primary);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.mobile-toggle.active .toggle-bar:nth-child(1) {
  transform: translateY(7px) rotate(45deg);
}

.mobile-toggle.active .toggle-bar:nth-child(2) {
  opacity: 0;
}

.mobile-toggle.active .toggle-bar:nth-child(3) {
  transform: translateY(-7px) rotate(-45deg);
}

.mobile-menu {
  position: fixed;
  top: var(--nav-height);
  left: 0;
  right: 0;
  z-index: 99;
  display: none;
  flex-direction: column;
  background: var(--bg-raised);
  border-bottom: 1px solid var(--border);
  transform: translateY(-110%);
  transition: transform var(--transition-normal);
}

.mobile-menu.active {
  transform: translateY(0);
}

.mobile-menu-link {
  color: var(--text-secondary);
  text-decoration: none;
  padding: 1rem 1.5rem;
  border-bottom: 1px solid var(--border);
}

.mobile-menu-link:hover {
  color: var(--text-primary);
  background: rgba(255, 255, 255, 0.03);
}

/* === Page & sections === */
.page {
  padding-top: var(--nav-height);
}

.section {
  max-width: 1080px;
  margin: 0 auto;
  padding: 6rem 1.5rem;
}

.section-title {
  font-size: 2rem;
  margin-bottom: 1rem;
}

.section-body {
  color: var(--text-secondary);
  max-width: 640px;
  margin-bottom: 2rem;
}

/* === Hero === */
.hero {
  position: relative;
  min-height: calc(100vh - var(--nav-height));
  max-width: 1080px;
  margin: 0 auto;
  padding: 4rem 1.5rem;
  display: flex;
  align-items: center;
}

.hero-title {
  font-size: 3rem;
  line-height: 1.15;
  margin-bottom: 1rem;
}

.hero-tagline {
  color: var(--text-secondary);
  font-size: 1.2rem;
  margin-bottom: 2.5rem;
  max-width: 480px;
}

.hero-cta {
  background: var(--gradient-accent);
  color: #fff;
  border: none;
  border-radius: var(--radius);
  padding: 0.9rem 2rem;
  font-size: 1rem;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.hero-cta:hover {
  transform: translateY(-2px);
  box-shadow: 0 8px 30px var(--accent-glow);
}

/* === Floating cards === */
.floating-cards {
  position: absolute;
  right: 3rem;
  top: 50%;
  pointer-events: none;
}

.floating-card {
  position: absolute;
  padding: 1rem 1.5rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  font-size: 0.9rem;
  color: var(--text-secondary);
  will-change: transform;
}

.floating-card-0 { top: -120px; right: 40px; }
.floating-card-1 { top: 0; right: 140px; }
.floating-card-2 { top: 110px; right: 20px; }

/* === Reveal animations === */
.fade-in,
.slide-in-left,
.slide-in-right {
  opacity: 0;
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.fade-in { transform: translateY(30px); }
.slide-in-left { transform: translateX(-40px); }
.slide-in-right { transform: translateX(40px); }

.fade-in.visible,
.slide-in-left.visible,
.slide-in-right.visible {
  opacity: 1;
  transform: none;
}

/* === Projects === */
.filter-bar {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 2rem;
}

.filter-btn {
  background: none;
  border: 1px solid var(--border);
  border-radius: 999px;
  color: var(--text-secondary);
  padding: 0.4rem 1.1rem;
  font-size: 0.85rem;
  cursor: pointer;
  text-transform: capitalize;
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.filter-btn:hover {
  color: var(--text-primary);
}

.filter-btn.active {
  color: var(--accent);
  border-color: var(--accent);
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.5rem;
}

.project-card {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
  opacity: 1;
  transform: translateY(0);
  transition: opacity var(--transition-normal), transform var(--transition-normal);
}

.project-card.hidden {
  opacity: 0;
  transform: translateY(-20px);
  pointer-events: none;
}

.project-title {
  margin-bottom: 0.5rem;
}

.project-description {
  color: var(--text-secondary);
  font-size: 0.95rem;
  margin-bottom: 1rem;
}

.project-tags {
  display: flex;
  gap: 0.4rem;
}

.project-tag {
  font-size: 0.75rem;
  color: var(--accent-alt);
  border: 1px solid var(--border);
  border-radius: 999px;
  padding: 0.1rem 0.6rem;
}

/* === Skills === */
.skill-list {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  max-width: 640px;
}

.skill-row {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.skill-name {
  width: 140px;
  flex-shrink: 0;
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.skill-track {
  flex: 1;
  height: 8px;
  background: var(--bg-raised);
  border-radius: 999px;
  overflow: hidden;
}

.skill-progress {
  height: 100%;
  background: var(--gradient-accent);
  border-radius: 999px;
  transition: width 1s cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Contact form === */
.contact-form {
  max-width: 640px;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.form-row {
  display: flex;
  gap: 1.25rem;
}

.form-row .form-field {
  flex: 1;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.field-label {
  font-size: 0.85rem;
  color: var(--text-muted);
}

.field-input {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  color: var(--text-primary);
  padding: 0.75rem 1rem;
  font-size: 0.95rem;
  font-family: inherit;
  transition: border-color var(--transition-fast);
}

.field-input:focus {
  outline: none;
  border-color: var(--accent);
}

.field-textarea {
  resize: vertical;
}

.submit-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.6rem;
  background: var(--gradient-accent);
  color: #fff;
  border: none;
  border-radius: var(--radius);
  padding: 0.9rem 2rem;
  font-size: 1rem;
  cursor: pointer;
  transition: background var(--transition-normal), opacity var(--transition-fast);
}

.submit-btn.pending {
  opacity: 0.75;
  cursor: wait;
}

.submit-btn.succeeded {
  background: var(--success);
}

.submit-btn.failed {
  background: var(--error);
}

.spinner {
  width: 14px;
  height: 14px;
  border: 2px solid rgba(255, 255, 255, 0.4);
  border-top-color: #fff;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Notification === */
/* Entry/exit transitions run inside the 100 ms / 300 ms windows the
   lifecycle grants before flipping phases. */
.notification {
  position: fixed;
  top: calc(var(--nav-height) + 20px);
  right: 20px;
  z-index: 9999;
  display: flex;
  align-items: center;
  gap: 1rem;
  min-width: 300px;
  max-width: 420px;
  padding: 1rem 1.25rem;
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  color: #fff;
  transition: transform var(--transition-normal);
}

.notification.entering,
.notification.leaving {
  transform: translateX(calc(100% + 20px));
}

.notification.shown {
  transform: translateX(0);
}

.notification-info { background: var(--accent); }
.notification-success { background: var(--success); }
.notification-error { background: var(--error); }

.notification-content {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  flex: 1;
}

.notification-glyph {
  font-weight: 700;
}

.notification-close {
  background: none;
  border: none;
  color: rgba(255, 255, 255, 0.8);
  font-size: 1.25rem;
  cursor: pointer;
  line-height: 1;
}

.notification-close:hover {
  color: #fff;
}

/* === Footer === */
.footer {
  border-top: 1px solid var(--border);
  padding: 2rem 1.5rem;
  text-align: center;
}

.footer-note {
  color: var(--text-muted);
  font-size: 0.85rem;
}

/* === Responsive === */
@media (max-width: 768px) {
  .nav-menu { display: none; }
  .mobile-toggle { display: flex; }
  .mobile-menu { display: flex; }
  .hero-title { font-size: 2.2rem; }
  .floating-cards { display: none; }
  .form-row { flex-direction: column; }
}
"#;
