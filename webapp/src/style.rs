// the toggle only writes inline overrides; everything it clears falls back to these rules
pub const CONTROLS: &str = r#"
.controls-layout {
    display: flex;
    flex-direction: row;
    min-height: 100vh;
    font-family: sans-serif;
}

.controls-side-bar {
    display: flex;
    flex-direction: row;
    flex: 0 0 320px;
    background-color: #f3f4f6;
    border-right: 1px solid #e5e7eb;
}

.controls-side-bar-content {
    flex: 1;
    padding: 16px;
    overflow-y: auto;
}

.controls-side-bar-content h2 {
    margin-top: 0;
    font-size: 1.1rem;
}

.controls-fold-img-container {
    margin: 10px 5px 0px 5px;
    cursor: pointer;
    user-select: none;
}

.controls-fold-button {
    display: inline-block;
    font-size: 1.5rem;
    line-height: 1;
    color: #2196F3;
}

.controls-main {
    flex: 1;
    padding: 16px;
}

.controls-status {
    color: #EF4444;
    font-size: 0.9rem;
}
"#;
