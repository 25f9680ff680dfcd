//! Page Shell
//! Static HTML and script. The script renders the component tree from
//! `/_dash-layout`, wires change events according to `/_dash-dependencies`,
//! and draws each returned figure with Plotly.

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Dashboard</title>
    <script src="https://cdn.plot.ly/plotly-2.27.0.min.js"></script>
    <style>
        * { box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 0;
            padding: 20px;
        }
        .dropdown { display: flex; flex-direction: column; gap: 4px; }
        .dropdown input, .dropdown select {
            width: 100%;
            padding: 8px;
            border: 1px solid #ccc;
            border-radius: 4px;
            font-size: 14px;
        }
        .range-slider { position: relative; padding: 10px 12px 30px; }
        .range-slider input[type=range] { width: 100%; }
        .range-marks { position: relative; height: 16px; font-size: 12px; color: #666; }
        .range-marks span { position: absolute; transform: translateX(-50%); white-space: nowrap; }
        .range-readout { font-size: 13px; color: #333; margin-top: 6px; }
        .graph { min-height: 450px; }
        .error { color: #c0392b; font-size: 13px; }
    </style>
</head>
<body>
    <div id="app"></div>

    <script>
        // Current value of every input component, keyed by id.
        const inputState = {};
        // Per output: last issued and last applied request sequence numbers.
        const issued = {};
        const applied = {};
        // Input id -> callbacks depending on it.
        const listeners = {};

        function renderComponent(c) {
            switch (c.type) {
                case 'Div': {
                    const el = document.createElement('div');
                    c.children.forEach(child => el.appendChild(renderComponent(child)));
                    return el;
                }
                case 'H1': {
                    const el = document.createElement('h1');
                    el.textContent = c.text;
                    Object.assign(el.style, c.style);
                    return el;
                }
                case 'P': {
                    const el = document.createElement('p');
                    el.textContent = c.text;
                    return el;
                }
                case 'Br':
                    return document.createElement('br');
                case 'Dropdown':
                    return renderDropdown(c);
                case 'RangeSlider':
                    return renderRangeSlider(c);
                case 'Graph': {
                    const el = document.createElement('div');
                    el.id = c.id;
                    el.className = 'graph';
                    return el;
                }
                default:
                    console.warn('unknown component', c);
                    return document.createElement('div');
            }
        }

        function renderDropdown(c) {
            const wrapper = document.createElement('div');
            wrapper.className = 'dropdown';
            inputState[c.id] = c.value;

            const select = document.createElement('select');
            select.id = c.id;
            c.options.forEach(opt => {
                const o = document.createElement('option');
                o.value = opt.value;
                o.textContent = opt.label;
                o.selected = opt.value === c.value;
                select.appendChild(o);
            });
            select.addEventListener('change', () => {
                inputState[c.id] = select.value;
                fire(c.id);
            });

            if (c.searchable) {
                const search = document.createElement('input');
                search.type = 'search';
                search.placeholder = c.placeholder;
                search.addEventListener('input', () => {
                    const needle = search.value.toLowerCase();
                    Array.from(select.options).forEach(o => {
                        o.hidden = needle !== '' && !o.textContent.toLowerCase().includes(needle);
                    });
                });
                wrapper.appendChild(search);
            }
            wrapper.appendChild(select);
            return wrapper;
        }

        function renderRangeSlider(c) {
            const wrapper = document.createElement('div');
            wrapper.className = 'range-slider';
            wrapper.id = c.id;
            inputState[c.id] = c.value.slice();

            const readout = document.createElement('div');
            readout.className = 'range-readout';
            const showReadout = () => {
                const [low, high] = inputState[c.id];
                readout.textContent = `${low} kg to ${high} kg`;
            };

            const handles = c.value.map((v, i) => {
                const input = document.createElement('input');
                input.type = 'range';
                input.min = c.min;
                input.max = c.max;
                input.step = c.step;
                input.value = v;
                input.addEventListener('change', () => {
                    const value = inputState[c.id];
                    value[i] = Number(input.value);
                    // Handles may cross; the value is always sent as [low, high].
                    value.sort((a, b) => a - b);
                    handles.forEach((h, j) => { h.value = value[j]; });
                    showReadout();
                    fire(c.id);
                });
                wrapper.appendChild(input);
                return input;
            });

            const marks = document.createElement('div');
            marks.className = 'range-marks';
            Object.entries(c.marks).forEach(([pos, label]) => {
                const span = document.createElement('span');
                span.style.left = `${(100 * (Number(pos) - c.min)) / (c.max - c.min)}%`;
                span.textContent = label;
                marks.appendChild(span);
            });
            wrapper.appendChild(marks);
            wrapper.appendChild(readout);
            showReadout();
            return wrapper;
        }

        async function runCallback(dep) {
            const output = dep.output;
            const seq = (issued[output] = (issued[output] || 0) + 1);
            const inputs = {};
            dep.inputs.forEach(id => { inputs[id] = inputState[id]; });

            try {
                const response = await fetch('/_dash-update-component', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ output, inputs }),
                });
                const body = await response.json();
                // A newer result for this output is already on screen.
                if (seq <= (applied[output] || 0)) {
                    return;
                }
                applied[output] = seq;

                const target = document.getElementById(output);
                if (!response.ok) {
                    Plotly.purge(target);
                    const message = document.createElement('div');
                    message.className = 'error';
                    message.textContent = body.error_message;
                    target.replaceChildren(message);
                    return;
                }
                target.innerHTML = '';
                Plotly.react(target, body.data, body.layout, { responsive: true });
            } catch (err) {
                console.error('callback failed', output, err);
            }
        }

        function fire(inputId) {
            (listeners[inputId] || []).forEach(runCallback);
        }

        async function init() {
            const [layout, deps] = await Promise.all([
                fetch('/_dash-layout').then(r => r.json()),
                fetch('/_dash-dependencies').then(r => r.json()),
            ]);

            const heading = layout.children.find(child => child.type === 'H1');
            if (heading) {
                document.title = heading.text;
            }
            document.getElementById('app').appendChild(renderComponent(layout));

            deps.forEach(dep => {
                dep.inputs.forEach(id => {
                    (listeners[id] = listeners[id] || []).push(dep);
                });
            });
            deps.forEach(runCallback);
        }

        init().catch(err => console.error('failed to load dashboard', err));
    </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn script() -> &'static str {
        let start = INDEX_HTML.find("<script>").unwrap();
        &INDEX_HTML[start..]
    }

    #[test]
    fn slider_value_is_sorted_before_firing() {
        let s = script();
        let sort = s.find("value.sort((a, b) => a - b)").unwrap();
        let fire = s[sort..].find("fire(c.id)").unwrap();
        assert!(fire > 0);
        assert!(!s.contains("inputState[c.id][i] ="));
    }

    #[test]
    fn error_message_is_rendered_as_text() {
        let s = script();
        assert!(s.contains("message.textContent = body.error_message"));
        assert!(!s.contains("${body.error_message}"));
        assert!(!s.contains("innerHTML = `"));
    }

    #[test]
    fn document_title_follows_layout_heading() {
        let s = script();
        assert!(s.contains("document.title = heading.text"));
        assert!(!INDEX_HTML.contains("Launch Records Dashboard"));
    }

    #[test]
    fn readout_is_plain_ascii() {
        assert!(INDEX_HTML.is_ascii());
    }
}
