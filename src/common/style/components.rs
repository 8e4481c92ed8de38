pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Layout */
.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  font-weight: 500;
  cursor: pointer;
  text-decoration: none;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:focus {
  box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.3);
}

.btn:hover {
  transform: scale(1.05);
  text-decoration: none;
}

.btn-primary {
  background-color: var(--primary);
  color: white;
  box-shadow: var(--shadow-glow);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

.btn-secondary {
  background-color: var(--neutral-200);
  color: var(--text-primary);
}

.btn-secondary:hover {
  background-color: var(--neutral-300);
}

.dark .btn-secondary {
  background-color: var(--neutral-700);
}

.dark .btn-secondary:hover {
  background-color: var(--neutral-600);
}

.btn-sm {
  padding: var(--space-1) var(--space-3);
  font-size: 0.875rem;
}

.btn-lg {
  padding: var(--space-3) var(--space-8);
  font-size: 1.125rem;
}

.btn-filter {
  background: transparent;
  border: 1px solid var(--border);
  color: var(--text-secondary);
  padding: var(--space-2) var(--space-6);
}

.btn-filter.active {
  background-color: var(--primary);
  border-color: var(--primary);
  color: white;
}

.btn-icon {
  background: transparent;
  border: none;
  cursor: pointer;
  font-size: 1.25rem;
  padding: var(--space-2);
  border-radius: var(--radius-md);
  color: var(--text-primary);
}

.btn-icon:hover {
  background-color: var(--neutral-200);
}

.dark .btn-icon:hover {
  background-color: var(--neutral-700);
}

.btn-close {
  background: transparent;
  border: none;
  cursor: pointer;
  font-size: 1rem;
  color: var(--text-tertiary);
}

.btn-close:hover {
  color: var(--text-primary);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
  transform: none;
}

/* Badges */
.badge {
  display: inline-block;
  padding: 2px var(--space-2);
  border-radius: var(--radius-full);
  font-size: 0.75rem;
  font-weight: 500;
}

.badge-secondary {
  background-color: var(--neutral-200);
  color: var(--text-secondary);
}

.dark .badge-secondary {
  background-color: var(--neutral-700);
  color: var(--neutral-300);
}

.badge-outline {
  border: 1px solid var(--border);
  color: var(--text-secondary);
}

.badge-feature {
  background-color: rgba(16, 185, 129, 0.15);
  color: var(--success);
}

.badge-row {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-bottom: var(--space-4);
}

/* Forms */
.form-group {
  margin-bottom: var(--space-4);
}

.form-label {
  display: block;
  margin-bottom: var(--space-2);
  font-weight: 500;
  color: var(--text-secondary);
}

.form-input {
  width: 100%;
  padding: var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
  font-family: inherit;
  transition: border-color var(--transition-fast) var(--easing-standard);
}

.form-input:focus {
  outline: none;
  border-color: var(--border-focus);
}

.form-input:disabled {
  opacity: 0.6;
}

.status-message {
  display: block;
  margin-top: var(--space-2);
  font-size: 0.875rem;
  color: var(--primary);
}

/* Modal */
.modal-overlay {
  position: fixed;
  inset: 0;
  background-color: rgba(0, 0, 0, 0.5);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 50;
  padding: var(--space-4);
}

.modal-content {
  background-color: var(--surface);
  border-radius: var(--radius-xl);
  max-width: 640px;
  width: 100%;
  max-height: 90vh;
  overflow-y: auto;
  padding: var(--space-6);
  box-shadow: var(--shadow-lg);
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: var(--space-4);
}

.modal-title {
  font-size: 1.5rem;
  font-weight: 700;
}

.modal-detail h4 {
  margin: var(--space-4) 0 var(--space-2);
}

.modal-detail p {
  color: var(--text-secondary);
}

/* Notices */
.notice-stack {
  position: fixed;
  top: calc(var(--navbar-height) + var(--space-4));
  right: var(--space-4);
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  z-index: 60;
}

.notice {
  display: flex;
  align-items: flex-start;
  gap: var(--space-3);
  min-width: 260px;
  max-width: 360px;
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
  border-left: 4px solid var(--border);
}

.notice-success {
  border-left-color: var(--success);
}

.notice-error {
  border-left-color: var(--error);
}

.notice-title {
  font-weight: 600;
}

.notice-body {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.notice-text {
  flex: 1;
}"#;
