pub const SECTION_STYLES: &str = r#"
/* Navbar */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 40;
  padding: var(--space-6) 0;
  transition: padding var(--transition-normal) var(--easing-standard),
              background-color var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.navbar.compact {
  padding: var(--space-3) 0;
  background-color: var(--glass);
  backdrop-filter: blur(12px);
  box-shadow: var(--shadow-md);
}

.nav-container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-logo {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--primary);
  text-decoration: none;
}

.nav-links {
  display: flex;
  gap: var(--space-8);
}

.nav-link {
  color: var(--text-secondary);
  font-size: 0.875rem;
  font-weight: 500;
  text-decoration: none;
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--primary);
  text-decoration: none;
}

.nav-link.active {
  color: var(--primary);
  border-bottom: 2px solid var(--primary);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.menu-toggle {
  display: none;
}

.mobile-menu {
  margin: var(--space-4);
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  background-color: var(--glass);
  backdrop-filter: blur(12px);
  box-shadow: var(--shadow-md);
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }
  .menu-toggle {
    display: inline-flex;
  }
}

/* Custom cursor */
.cursor-layer {
  position: fixed;
  top: 0;
  left: 0;
  pointer-events: none;
}

.cursor-ring-layer {
  z-index: 80;
  mix-blend-mode: difference;
}

.cursor-trail-layer {
  z-index: 70;
  transition: transform 0.15s ease-out;
}

.cursor-ring {
  width: 32px;
  height: 32px;
  transform: translate(-50%, -50%);
  border-radius: var(--radius-full);
  border: 2px solid white;
  transition: transform var(--transition-fast) var(--easing-standard),
              background-color var(--transition-fast) var(--easing-standard);
}

.cursor-ring.hovering {
  transform: translate(-50%, -50%) scale(1.5);
  background-color: rgba(255, 255, 255, 0.2);
}

.cursor-dot {
  width: 8px;
  height: 8px;
  transform: translate(-50%, -50%);
  border-radius: var(--radius-full);
  background-color: rgba(59, 130, 246, 0.6);
  filter: blur(2px);
}

/* Hero */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  position: relative;
  overflow: hidden;
  padding-top: var(--space-20);
}

.hero-glow {
  position: absolute;
  width: 500px;
  height: 500px;
  border-radius: var(--radius-full);
  filter: blur(100px);
  opacity: 0.3;
}

.hero-glow-primary {
  top: 25%;
  left: 25%;
  background-color: var(--primary);
}

.hero-glow-accent {
  bottom: 25%;
  right: 25%;
  background-color: var(--accent);
}

.hero-inner {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-12);
  align-items: center;
  position: relative;
  z-index: 10;
}

.hero-kicker {
  color: var(--text-secondary);
  font-size: 1.25rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
}

.hero-name {
  font-size: 4rem;
  font-weight: 900;
  line-height: 1;
  color: var(--primary);
  margin: var(--space-4) 0;
}

.hero-role {
  font-size: 2rem;
  font-weight: 700;
  margin-bottom: var(--space-6);
}

.hero-blurb {
  font-size: 1.25rem;
  color: var(--text-secondary);
  max-width: 36rem;
  margin-bottom: var(--space-8);
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
}

.hero-portrait-frame {
  position: relative;
}

.hero-portrait {
  aspect-ratio: 4 / 5;
  border-radius: var(--radius-xl);
  overflow: hidden;
  box-shadow: var(--shadow-lg);
  transition: transform var(--transition-normal) var(--easing-standard);
}

.hero-portrait img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hero-scroll-hint {
  position: absolute;
  bottom: var(--space-8);
  left: 50%;
  transform: translateX(-50%);
  font-size: 1.5rem;
  color: var(--text-tertiary);
  text-decoration: none;
}

@media (max-width: 768px) {
  .hero-inner {
    grid-template-columns: 1fr;
  }
  .hero-name {
    font-size: 2.5rem;
  }
}

/* Sections */
.section-heading {
  text-align: center;
  margin-bottom: var(--space-12);
}

.section-heading h2 {
  font-size: 2.5rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.section-heading p {
  color: var(--text-secondary);
  font-size: 1.125rem;
  max-width: 42rem;
  margin: 0 auto;
}

.projects-section,
.contact-section {
  padding: var(--space-20) 0;
}

/* Skills and projects grids */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: var(--space-6);
  margin-bottom: var(--space-16);
}

.skill-card,
.project-card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  padding: var(--space-6);
  transition: transform var(--transition-slow) var(--easing-standard),
              box-shadow var(--transition-slow) var(--easing-standard);
}

.skill-card:hover,
.project-card:hover {
  transform: translateY(-8px);
  box-shadow: var(--shadow-lg);
}

.skill-card h3 {
  margin-bottom: var(--space-4);
}

.card-icon {
  font-size: 2rem;
  display: inline-block;
  margin-bottom: var(--space-4);
}

.filter-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-3);
  margin-bottom: var(--space-8);
}

.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: var(--space-8);
}

.project-card {
  cursor: pointer;
}

.project-card-top {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  margin-bottom: var(--space-4);
}

.project-title {
  margin-bottom: var(--space-3);
}

.project-desc {
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

.project-stack {
  margin-bottom: var(--space-4);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.stack-label {
  font-weight: 600;
  color: var(--text-primary);
}

.project-links {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  padding-top: var(--space-4);
  border-top: 1px solid var(--border);
}

/* Contact */
.contact-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-12);
  max-width: 56rem;
  margin: 0 auto;
}

@media (max-width: 768px) {
  .contact-grid {
    grid-template-columns: 1fr;
  }
}

.contact-form,
.contact-panel {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  padding: var(--space-6);
}

.contact-aside {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.contact-panel h3 {
  margin-bottom: var(--space-4);
}

.contact-line {
  display: block;
  color: var(--text-secondary);
  margin-bottom: var(--space-2);
  text-decoration: none;
}

.contact-line:hover {
  color: var(--primary);
}

.social-row {
  display: flex;
  gap: var(--space-3);
}

.btn-submit {
  width: 100%;
}

/* Footer */
.site-footer {
  padding: var(--space-8) 0;
  text-align: center;
  color: var(--text-secondary);
  border-top: 1px solid var(--border);
}

/* Not found */
.not-found {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-4);
}

.not-found-card {
  text-align: center;
  max-width: 28rem;
}

.not-found-glyph {
  font-size: 4rem;
  margin-bottom: var(--space-6);
}

.not-found-card h1 {
  font-size: 3.5rem;
  margin-bottom: var(--space-4);
}

.not-found-card h2 {
  margin-bottom: var(--space-4);
}

.not-found-card p {
  color: var(--text-secondary);
  margin-bottom: var(--space-8);
}

.not-found-card code {
  background-color: var(--neutral-200);
  padding: 2px var(--space-2);
  border-radius: var(--radius-sm);
}

.dark .not-found-card code {
  background-color: var(--neutral-700);
}

.not-found-actions {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
}"#;
