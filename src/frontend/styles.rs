pub const SCROLL_INDICATOR_STYLE_ID: &str = "scroll-indicator-styles";
pub const MODAL_STYLE_ID: &str = "modal-styles";
pub const NOTIFICATION_STYLE_ID: &str = "notification-styles";

pub const SCROLL_INDICATOR_CSS: &str = r#"
.scroll-indicator {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 3px;
    background: var(--bg-secondary);
    z-index: 9999;
}

.scroll-progress {
    height: 100%;
    background: linear-gradient(90deg, var(--accent-primary), var(--accent-secondary));
    width: 0%;
    transition: width 0.1s ease;
}
"#;

pub const MODAL_CSS: &str = r#"
.modal-project-content h3 {
    font-family: var(--font-heading);
    color: var(--accent-primary);
    margin: var(--space-xl) 0 var(--space-md) 0;
}

.modal-project-content h3:first-child {
    margin-top: 0;
}

.modal-project-content ul {
    margin-bottom: var(--space-lg);
    padding-left: var(--space-lg);
}

.modal-project-content li {
    margin-bottom: var(--space-sm);
    color: var(--text-secondary);
}

.modal-project-content pre {
    background: var(--bg-secondary);
    border-radius: var(--border-radius);
    padding: var(--space-lg);
    overflow-x: auto;
    margin: var(--space-lg) 0;
}

.modal-project-content code {
    font-family: var(--font-mono);
    font-size: 0.9rem;
}

.project-hero {
    text-align: center;
    padding: var(--space-xl) 0;
    background: var(--bg-secondary);
    border-radius: var(--border-radius);
    margin-bottom: var(--space-xl);
}

.project-hero .project-placeholder {
    color: var(--accent-primary);
}
"#;

// The fade-out delay (4.7s) plus its duration (0.3s) matches the 5s lifetime.
pub const NOTIFICATION_CSS: &str = r#"
.notification {
    position: fixed;
    top: 20px;
    right: 20px;
    padding: var(--space-md) var(--space-lg);
    border-radius: var(--border-radius);
    color: white;
    font-weight: 500;
    z-index: 10000;
    animation: slideInRight 0.3s ease-out, fadeOut 0.3s ease-out 4.7s;
    max-width: 400px;
    word-wrap: break-word;
}

.notification-success {
    background: linear-gradient(135deg, #10b981, #059669);
}

.notification-error {
    background: linear-gradient(135deg, #ef4444, #dc2626);
}

.notification-info {
    background: linear-gradient(135deg, var(--accent-primary), var(--accent-secondary));
}

@keyframes slideInRight {
    from {
        transform: translateX(100%);
        opacity: 0;
    }
    to {
        transform: translateX(0);
        opacity: 1;
    }
}

@keyframes fadeOut {
    from {
        opacity: 1;
    }
    to {
        opacity: 0;
    }
}
"#;
