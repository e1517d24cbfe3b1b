//! Global CSS styles for the payment page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACE */
  --background: #000000;
  --surface-border: #1f2937;
  --input-border: #3a3a3a;

  /* GRADIENT */
  --gradient-purple: #9333ea;
  --gradient-pink: #ec4899;
  --gradient-orange: #fb923c;
  --accent-gradient: linear-gradient(90deg, var(--gradient-purple), var(--gradient-pink), var(--gradient-orange));

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-muted: #797979;
  --text-faint: #9ca3af;

  /* SEMANTIC */
  --danger: #ef4444;

  /* Typography */
  --font-sans: 'Manrope', 'Inter', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-flip: 700ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--background);
  color: var(--text-primary);
  font-family: var(--font-sans);
  min-height: 100vh;
}

/* === Layout === */
.payment-page {
  position: relative;
  min-height: 100vh;
  padding: 8rem 1rem 6rem;
}

.payment-grid {
  max-width: 72rem;
  margin: 0 auto;
  display: grid;
  grid-template-columns: 5fr 1fr 4fr 2fr;
  gap: 4rem;
  align-items: center;
}

.payment-card-column {
  grid-column: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
}

.payment-form-column {
  grid-column: 3;
}

.payment-caption {
  display: flex;
  flex-direction: column;
  text-align: center;
  gap: 0.5rem;
}

.gradient-text {
  background: var(--accent-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.payment-title {
  font-size: 30px;
  font-weight: 400;
  margin-bottom: 6rem;
}

/* === Credit Card === */
.card-perspective {
  perspective: 1000px;
  margin-bottom: 4rem;
}

.credit-card {
  position: relative;
  width: 195px;
  height: 128px;
  transform-style: preserve-3d;
  transition: transform var(--transition-flip);
}

.credit-card.flipped {
  transform: rotateY(180deg);
}

.card-face {
  position: absolute;
  inset: 0;
  border-radius: 1rem;
  overflow: hidden;
  backface-visibility: hidden;
  -webkit-backface-visibility: hidden;
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.5);
}

.card-front {
  background: linear-gradient(135deg, #1e1b4b, #312e81 60%, #4c1d95);
  padding: 0.9rem;
}

.card-chip {
  width: 28px;
  height: 20px;
  border-radius: 4px;
  background: linear-gradient(135deg, #fde68a, #d97706);
}

.card-number-preview {
  margin-top: 1.4rem;
  font-family: monospace;
  font-size: 0.7rem;
  letter-spacing: 0.05em;
  color: rgba(255, 255, 255, 0.85);
}

.card-brand {
  position: absolute;
  right: 0.9rem;
  bottom: 0.7rem;
  font-weight: 800;
  font-style: italic;
  color: #ffffff;
}

.card-back {
  transform: rotateY(180deg);
  background: linear-gradient(135deg, var(--gradient-purple), var(--gradient-pink), var(--gradient-orange));
}

.card-stripe {
  height: 2rem;
  margin-top: 1rem;
  background: #1f2937;
}

.card-signature {
  margin: 1rem 1rem 0;
  height: 2rem;
  background: #ffffff;
  border-radius: 4px;
  display: flex;
  align-items: center;
  justify-content: flex-end;
  padding: 0 0.75rem;
}

.card-cvv-label {
  font-family: monospace;
  font-size: 0.75rem;
  color: #1f2937;
}

.card-back-hint {
  margin: 0.5rem 1rem 0;
  font-size: 0.6rem;
  color: rgba(255, 255, 255, 0.8);
}

/* === Form === */
.payment-form {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  max-width: 28rem;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.5rem;
}

.form-field {
  display: flex;
  flex-direction: column;
}

.payment-form-label {
  display: block;
  margin-bottom: 0.5rem;
  font-size: 0.875rem;
  color: var(--text-muted);
}

.payment-form-input {
  background: transparent;
  border: none;
  border-bottom: 1px solid var(--input-border);
  color: var(--text-primary);
  font: inherit;
  padding: 0.5rem 0;
  outline: none;
  transition: border-color var(--transition-fast);
}

.payment-form-input:focus {
  border-bottom-color: var(--gradient-pink);
}

.payment-form-input::placeholder {
  color: var(--text-muted);
}

.payment-form-input-error {
  border-bottom-color: var(--danger);
}

.field-error {
  margin-top: 0.25rem;
  font-size: 0.875rem;
  color: var(--danger);
}

.form-actions {
  display: flex;
  justify-content: center;
  padding-top: 2rem;
}

.payment-form-button {
  border: none;
  border-radius: 9999px;
  padding: 0.75rem 3rem;
  background: var(--accent-gradient);
  color: #ffffff;
  font: inherit;
  cursor: pointer;
  transition: opacity var(--transition-fast);
}

.payment-form-button:disabled {
  opacity: 0.4;
  cursor: not-allowed;
}

/* === Accordion === */
.accordion {
  margin-top: 4rem;
  max-width: 28rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.accordion-header {
  border-top: 1px solid var(--surface-border);
  padding: 1rem 0;
  display: flex;
  justify-content: space-between;
  align-items: center;
  cursor: pointer;
}

.accordion-header.expanded {
  padding-bottom: 0.5rem;
}

.payment-form-accordion-text {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.accordion-chevron {
  color: var(--text-muted);
  transition: transform var(--transition-fast);
}

.accordion-chevron.open {
  transform: rotate(180deg);
}

.accordion-body {
  padding-bottom: 1rem;
  font-size: 0.75rem;
  color: var(--text-faint);
}

/* === Progress Indicator === */
.progress {
  position: absolute;
  left: 0;
  bottom: 5rem;
  width: 100%;
}

.progress-line {
  position: absolute;
  top: 6px;
  left: 0;
  width: 100%;
  height: 1px;
  background: var(--surface-border);
}

.progress-steps {
  position: relative;
  max-width: 72rem;
  margin: 0 auto;
  display: flex;
  justify-content: space-around;
}

.progress-step {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
}

.progress-circle {
  width: 12px;
  height: 12px;
  border-radius: 9999px;
  background: var(--surface-border);
}

.progress-circle-appointment {
  background: var(--gradient-purple);
}

.progress-circle.current {
  background: var(--gradient-pink);
  box-shadow: 0 0 0 4px rgba(236, 72, 153, 0.25);
}

.progress-text {
  font-size: 0.75rem;
  color: var(--text-muted);
}

@media (max-width: 768px) {
  .payment-grid {
    grid-template-columns: 1fr;
    gap: 3rem;
  }
  .payment-card-column, .payment-form-column {
    grid-column: 1;
  }
  .progress {
    display: none;
  }
}
"#;
